use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::Write;

/// Render the completion script for `shell`
pub fn script(shell: Shell, cmd: &mut Command) -> Vec<u8> {
    let bin_name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell, cmd, bin_name, &mut buf);
    buf
}

pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    std::io::stdout().write_all(&script(shell, cmd))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_uses_command_name() {
        let mut cmd = Command::new("dirsubmit").arg(clap::Arg::new("project").long("project"));
        let output = String::from_utf8(script(Shell::Bash, &mut cmd)).unwrap();

        assert!(output.contains("_dirsubmit()"));
        assert!(output.contains("--project"));
    }
}
