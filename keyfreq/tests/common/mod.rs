// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

#![allow(dead_code)]

use keyfreq::error::Error;

/// Installs a test logger once per test binary so trace output shows up on failures.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Runs a report writer against an in-memory sink and returns what it wrote.
pub fn render<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), Error>,
{
    let mut out = Vec::new();
    write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Words with many repeats, in no particular order.
pub const PASSAGE: &str = "it was the best of times it was the worst of times     it was the age of wisdom it was the age of foolishness     it was the epoch of belief it was the epoch of incredulity";
