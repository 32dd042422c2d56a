use super::Failure;
use core::fmt::Display;

impl Display for Failure {
    /// `{}` writes `(<code>) <message>`; `{:#}` writes the full stacktrace.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return write!(f, "({}) {}", self.code, self.message);
        }
        Display::fmt(&self.stacktrace(), f)
    }
}

impl core::error::Error for Failure {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}
