use crate::command::Command;

/// An SMT-LIB script: a sequence of commands.
#[derive(Debug, Clone, Default)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn with_commands(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn push(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Whether the script already ends a query, i.e. contains `(check-sat)`.
    pub fn has_check_sat(&self) -> bool {
        self.commands.iter().any(|c| matches!(c, Command::CheckSat))
    }

    /// Whether the script requests a model via `(get-model)`.
    pub fn has_get_model(&self) -> bool {
        self.commands.iter().any(|c| matches!(c, Command::GetModel))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Sort;
    use crate::term::Term;

    #[test]
    fn new_creates_empty_script() {
        let script = Script::new();
        assert!(script.is_empty());
        assert_eq!(script.len(), 0);
        assert!(script.commands().is_empty());
    }

    #[test]
    fn push_preserves_order() {
        let mut script = Script::new();
        script.push(Command::DeclareConst("x".to_string(), Sort::Int));
        script.push(Command::Assert(Term::Gt(
            Box::new(Term::Const("x".to_string())),
            Box::new(Term::IntLit(0)),
        )));
        script.push(Command::CheckSat);

        let cmds = script.commands();
        assert!(matches!(&cmds[0], Command::DeclareConst(n, Sort::Int) if n == "x"));
        assert!(matches!(&cmds[1], Command::Assert(_)));
        assert!(matches!(&cmds[2], Command::CheckSat));
    }

    #[test]
    fn query_detection() {
        let mut script = Script::new();
        assert!(!script.has_check_sat());
        assert!(!script.has_get_model());

        script.push(Command::CheckSat);
        script.push(Command::GetModel);
        assert!(script.has_check_sat());
        assert!(script.has_get_model());
    }

    #[test]
    fn with_commands_creates_script() {
        let script = Script::with_commands(vec![
            Command::SetLogic("QF_LIA".to_string()),
            Command::CheckSat,
        ]);
        assert_eq!(script.len(), 2);
        assert!(!script.is_empty());
    }
}
