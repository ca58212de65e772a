//
// Copyright (c) 2022 Elektrobit Automotive GmbH
//
// This file is part of flake-pilot
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
//
#[macro_use]
extern crate log;

pub mod command;
pub mod error;

use std::env;
use std::process::{ExitCode, Termination};

use env_logger::Env;

use crate::error::NotError;

fn setup_logger() {
    let env = Env::default().filter_or("NOT_LOG_LEVEL", "error").write_style_or("NOT_LOG_STYLE", "always");
    env_logger::init_from_env(env);
}

fn run() -> Result<ExitCode, NotError> {
    /*!
    not is a tool which executes the command given on its own
    command line and reports the opposite of that command's exit
    status. It exists for test harnesses that need a call whose
    success and failure semantics are flipped.
    !*/
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        // nothing to invert
        println!("Too few args to {}", args[0]);
        return Ok(ExitCode::SUCCESS);
    }

    let call_params = command::reassemble(&args[1..])?;
    let status = command::call(&call_params)?;

    if status.success() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    setup_logger();

    match run() {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            err.report()
        }
    }
}
