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
// under the License..

#[macro_use]
extern crate log;

use std::path::Path;
use std::{env, process};

mod manifest;
mod models;
mod utils;


fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("enclave-mem");
        println!("Usage: {} <python.manifest.sgx>", program);
        process::exit(1);
    }

    let report = match manifest::analyze_file(Path::new(&args[1])) {
        Ok(report) => report,
        Err(e) => {
            error!("[-] Enclave memory estimate failed: {}", e);
            process::exit(1);
        }
    };

    if report.files_skipped > 0 {
        warn!(
            "{} of {} trusted files are not regular files on disk and were not counted",
            report.files_skipped,
            report.files_skipped + report.files_counted
        );
    }
    print!("{}", report);
}
