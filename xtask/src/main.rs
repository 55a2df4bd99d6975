// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Build automation tasks for the Seira workspace.
// Run with: cargo xtask <command>

use anyhow::{bail, Result};
use std::process::Command;
use std::time::Instant;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

struct Task {
    name: &'static str,
    description: &'static str,
    args: &'static [&'static str],
}

const TASKS: &[Task] = &[
    Task {
        name: "build",
        description: "Build all workspace crates",
        args: &["build", "--workspace"],
    },
    Task {
        name: "test",
        description: "Run unit, integration and doc tests",
        args: &["test", "--workspace"],
    },
    Task {
        name: "check",
        description: "Type-check without producing binaries",
        args: &["check", "--workspace"],
    },
    Task {
        name: "format",
        description: "Format all code with rustfmt",
        args: &["fmt", "--all"],
    },
    Task {
        name: "clippy",
        description: "Lint with warnings promoted to errors",
        args: &["clippy", "--workspace", "--", "-D", "warnings"],
    },
    Task {
        name: "bench",
        description: "Run criterion benchmarks",
        args: &["bench", "--workspace"],
    },
];

fn print_help() {
    println!("{BOLD}Usage:{RESET} cargo xtask <command>\n");
    println!("{BOLD}Available commands:{RESET}");
    for task in TASKS {
        println!("  {BOLD}{:<8}{RESET} {}", task.name, task.description);
    }
    println!("  {BOLD}{:<8}{RESET} Run build, test, check, format and clippy in sequence", "all");
}

fn run_task(task: &Task) -> Result<()> {
    println!("\n{BOLD}━━━ {} ━━━{RESET}", task.description);
    println!("cargo {}", task.args.join(" "));

    let start = Instant::now();
    let status = Command::new("cargo").args(task.args).status()?;
    let elapsed = start.elapsed().as_secs_f64();

    if status.success() {
        println!("{BOLD}{GREEN}✓ {} completed in {elapsed:.2}s{RESET}", task.name);
        Ok(())
    } else {
        bail!("{RED}✗ {} failed after {elapsed:.2}s{RESET}", task.name);
    }
}

fn run_all() -> Result<()> {
    let start = Instant::now();
    // Benches are excluded from the pipeline; they take minutes on their own.
    for task in TASKS.iter().filter(|task| task.name != "bench") {
        run_task(task)?;
    }
    println!(
        "\n{BOLD}{GREEN}✓ Pipeline completed in {:.2}s{RESET}",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_help();
        return Ok(());
    };

    if command == "all" {
        return run_all();
    }
    match TASKS.iter().find(|task| task.name == command.as_str()) {
        Some(task) => run_task(task),
        None => {
            print_help();
            bail!("Unknown command: {command}");
        }
    }
}
