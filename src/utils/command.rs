// src/utils/command.rs
use std::process::Command;

/// Renders a command the way it would be typed, quoting arguments with spaces or quotes.
pub fn command_to_string(command: &Command) -> String {
    let program_path = command.get_program();
    let arguments: Vec<&str> = command.get_args().filter_map(|arg| arg.to_str()).collect();
    let mut command_string = String::new();
    if let Some(path) = program_path.to_str() {
        command_string.push_str(path);
    } else {
        command_string.push_str("<non-UTF8 program path>");
    }
    for arg in arguments {
        command_string.push(' ');
        if arg.contains(' ') || arg.contains('"') {
            command_string.push('"');
            command_string.push_str(arg.replace('"', "\"\"").as_str());
            command_string.push('"');
        } else {
            command_string.push_str(arg);
        }
    }
    command_string
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_arguments_with_spaces() {
        let mut cmd = Command::new("/opt/netbeans/bin/netbeans");
        cmd.args(["--userdir", "/home/dev/My IDE", "--locale", "ru"]);
        assert_eq!(
            command_to_string(&cmd),
            r#"/opt/netbeans/bin/netbeans --userdir "/home/dev/My IDE" --locale ru"#
        );
    }

    #[test]
    fn doubles_embedded_quotes() {
        let mut cmd = Command::new("ide");
        cmd.arg(r#"-J-Dname="x""#);
        assert_eq!(command_to_string(&cmd), r#"ide "-J-Dname=""x""""#);
    }
}
