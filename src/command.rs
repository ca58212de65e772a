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
use std::process::{Command, ExitStatus};

use crate::error::NotError;

pub fn reassemble(tokens: &[String]) -> Result<Vec<String>, NotError> {
    /*!
    Join the given tokens with a single space and split the result
    back into call parameters using shell word splitting rules,
    honoring quoting and escaping. A quoted multi word token stays
    one call parameter across the round trip.
    !*/
    let call_cmd = tokens.join(" ");
    let call_params = shell_words::split(&call_cmd)?;
    if call_params.is_empty() {
        return Err(NotError::EmptyCommand);
    }
    Ok(call_params)
}

pub fn call(call_params: &[String]) -> Result<ExitStatus, NotError> {
    /*!
    Execute the call parameters as a child process with inherited
    standard channels and wait for it to terminate
    !*/
    let mut call = Command::new(&call_params[0]);
    for arg in &call_params[1..] {
        call.arg(arg);
    }
    debug!("CALL: {} -> {:?}", &call_params[0], call.get_args());
    Ok(call.status()?)
}
