use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::args::CliArgs;

pub fn completions_cmd(shell: Shell) {
    let mut command = CliArgs::command();
    generate(shell, &mut command, "larder", &mut std::io::stdout());
}
