// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

fn main() -> std::process::ExitCode {
    bijux_research_cli::main_entry()
}
