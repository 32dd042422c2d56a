//! Reverse Polish Notation calculator
//!
//! A small REPL built entirely on the propagation protocol. Each layer owns a
//! code range: the operand stack raises in the 3000s, the engine in the 1000s
//! and the driver in the 2000s. Every failure that reaches the driver is
//! rendered and released, and the loop keeps going.
//!
//! Run with: cargo run --example rpn_calc
//!
//! ```text
//! 2 0 /
//! Exception: (1000) Division by zero!
//!   at demos/rpn_calc.rs:...
//!   at demos/rpn_calc.rs:...
//!   at demos/rpn_calc.rs:...
//! ```

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use dare_rail::prelude::*;
use dare_rail::print_stacktrace;

// =============================================================================
// Operand stack
// =============================================================================

mod stack {
    use dare_rail::prelude::*;

    pub const STACK_EXCEPTION: i32 = 3000;
    pub const CAPACITY: usize = 10;

    #[derive(Debug, Default)]
    pub struct Stack {
        slots: Vec<f64>,
    }

    impl Stack {
        pub fn new() -> Self {
            Self { slots: Vec::with_capacity(CAPACITY) }
        }

        pub fn depth(&self) -> usize {
            self.slots.len()
        }

        pub fn slots(&self) -> &[f64] {
            &self.slots
        }

        pub fn push(&mut self, value: f64) -> Outcome {
            assert_lt!(self.depth(), CAPACITY, "The stack is too full!", STACK_EXCEPTION);
            self.slots.push(value);
            Ok(())
        }

        pub fn pop(&mut self) -> Outcome<f64> {
            let top = self.slots.pop();
            assert_not_null!(top, "The stack is empty!", STACK_EXCEPTION);
            Ok(top.unwrap_or_default())
        }
    }
}

// =============================================================================
// Tokenizer
// =============================================================================

mod tokenizer {
    /// Longest accepted token, in bytes.
    pub const TOKEN_MAX: usize = 255;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Operation {
        Sum,
        Subtract,
        Multiply,
        Divide,
        Clear,
        Help,
        Quit,
        Sqrt,
        Invalid,
    }

    impl Operation {
        pub const VALID: [(Operation, &'static str); 8] = [
            (Operation::Sum, "+"),
            (Operation::Subtract, "-"),
            (Operation::Multiply, "*"),
            (Operation::Divide, "/"),
            (Operation::Clear, "clear"),
            (Operation::Help, "help"),
            (Operation::Quit, "quit"),
            (Operation::Sqrt, "sqrt"),
        ];

        fn lookup(word: &str) -> Self {
            Self::VALID
                .iter()
                .find(|(_, name)| *name == word)
                .map_or(Operation::Invalid, |(op, _)| *op)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Token {
        Number(f64),
        Operation(Operation),
        Invalid,
    }

    pub fn classify(word: &str) -> Token {
        if word.len() > TOKEN_MAX {
            return Token::Invalid;
        }
        match word.parse::<f64>() {
            Ok(number) => Token::Number(number),
            Err(_) => Token::Operation(Operation::lookup(word)),
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

mod engine {
    use std::ops::ControlFlow;

    use dare_rail::prelude::*;

    use crate::stack::Stack;
    use crate::tokenizer::Operation;

    pub const ENGINE_EXCEPTION: i32 = 1000;

    const TOO_FEW_ARGS: &str = "Too few arguments!";

    // Stack layout, top last:
    //
    //   NEXT : a
    //   TOP  : b

    /// NEXT + TOP
    fn sum(stack: &mut Stack) -> Outcome {
        assert_gt!(stack.depth(), 1, TOO_FEW_ARGS, ENGINE_EXCEPTION);
        let x = check!(stack.pop());
        let y = check!(stack.pop());
        check!(stack.push(x + y));
        Ok(())
    }

    /// NEXT - TOP
    fn subtract(stack: &mut Stack) -> Outcome {
        assert_gt!(stack.depth(), 1, TOO_FEW_ARGS, ENGINE_EXCEPTION);
        let y = check!(stack.pop());
        let x = check!(stack.pop());
        check!(stack.push(x - y));
        Ok(())
    }

    /// NEXT * TOP
    fn multiply(stack: &mut Stack) -> Outcome {
        assert_gt!(stack.depth(), 1, TOO_FEW_ARGS, ENGINE_EXCEPTION);
        let x = check!(stack.pop());
        let y = check!(stack.pop());
        check!(stack.push(x * y));
        Ok(())
    }

    /// NEXT / TOP; a zero divisor is put back before raising.
    fn divide(stack: &mut Stack) -> Outcome {
        assert_gt!(stack.depth(), 1, TOO_FEW_ARGS, ENGINE_EXCEPTION);
        let x = check!(stack.pop());
        if x == 0.0 {
            check!(stack.push(x));
            throw!("Division by zero!", ENGINE_EXCEPTION);
        }
        let y = check!(stack.pop());
        check!(stack.push(y / x));
        Ok(())
    }

    fn clear(stack: &mut Stack) -> Outcome {
        loop {
            check!(stack.pop());
            if stack.depth() == 0 {
                return Ok(());
            }
        }
    }

    /// Square root of TOP; a negative operand is put back before raising.
    fn square_root(stack: &mut Stack) -> Outcome {
        assert_not_equal!(stack.depth(), 0, TOO_FEW_ARGS, ENGINE_EXCEPTION);
        let x = check!(stack.pop());
        if x < 0.0 {
            check!(stack.push(x));
            throw!("Complex root!", ENGINE_EXCEPTION);
        }
        check!(stack.push(x.sqrt()));
        Ok(())
    }

    /// Pushes a literal onto the stack.
    pub fn number(stack: &mut Stack, value: f64) -> Outcome {
        check_cause!(stack.push(value), "Number insertion failure", ENGINE_EXCEPTION);
        Ok(())
    }

    pub fn operate(stack: &mut Stack, op: Operation) -> Outcome<ControlFlow<()>> {
        match op {
            Operation::Quit => {
                println!("Good bye!");
                return Ok(ControlFlow::Break(()));
            },
            Operation::Sum => check!(sum(stack)),
            Operation::Subtract => check!(subtract(stack)),
            Operation::Multiply => check!(multiply(stack)),
            Operation::Divide => check!(divide(stack)),
            Operation::Sqrt => check!(square_root(stack)),
            Operation::Clear => check!(clear(stack)),
            Operation::Help => help(),
            Operation::Invalid => {
                help();
                throw!("Invalid operation!", ENGINE_EXCEPTION);
            },
        }
        Ok(ControlFlow::Continue(()))
    }

    pub fn help() {
        let names: Vec<&str> = Operation::VALID.iter().map(|(_, name)| *name).collect();
        println!("Operations:");
        println!("{}", names.join(" , "));
    }

    pub fn print(stack: &Stack) {
        const LINES: usize = 5;

        let slots = stack.slots();
        let skipped = slots.len().saturating_sub(LINES);
        for _ in slots.len()..LINES {
            println!(" :           ");
        }
        for (index, value) in slots.iter().enumerate().skip(skipped) {
            println!("{}: {:>15.12}", index, value);
        }
        println!("------------------");
    }
}

// =============================================================================
// Driver
// =============================================================================

const MAIN_EXCEPTION: i32 = 2000;

fn step(stack: &mut stack::Stack, word: &str) -> Outcome<ControlFlow<()>> {
    use tokenizer::Token;

    match tokenizer::classify(word) {
        Token::Operation(op) => Ok(check!(engine::operate(stack, op))),
        Token::Number(value) => {
            check!(engine::number(stack, value));
            Ok(ControlFlow::Continue(()))
        },
        Token::Invalid => throw!("Syntax error!", MAIN_EXCEPTION),
    }
}

fn update(stack: &stack::Stack) -> io::Result<()> {
    engine::print(stack);
    print!("^: ");
    io::stdout().flush()
}

fn main() -> io::Result<()> {
    let mut stack = stack::Stack::new();

    engine::help();
    update(&stack)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        for word in line.split_whitespace() {
            let flow = scope(|| step(&mut stack, word)).recover(|failure| {
                print_stacktrace(&failure);
                release(Some(failure));
                ControlFlow::Continue(())
            });
            if flow.is_break() {
                return Ok(());
            }
        }
        update(&stack)?;
    }

    println!("Good bye!");
    Ok(())
}
