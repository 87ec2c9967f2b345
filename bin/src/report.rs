use std::{
    fmt::{self, Display, Formatter},
    io::{self, IsTerminal},
    ops::Range,
};

use ariadne::{Config, Label, Report, ReportKind, Source};
use interpreter::InterpreterError;
use lexer::LexerError;
use parser::ParserError;
use yansi::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
    Runtime,
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lexical => write!(f, "Lexical Error"),
            DiagnosticKind::Syntax => write!(f, "Syntax Error"),
            DiagnosticKind::Runtime => write!(f, "Runtime Error"),
        }
    }
}

/// A pipeline failure ready to be rendered against the program source.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct Diagnostic {
    kind: DiagnosticKind,
    span: Option<Range<usize>>,
    message: String,
}

impl Diagnostic {
    fn new<M: ToString>(kind: DiagnosticKind, offset: Option<usize>, message: M) -> Self {
        Self {
            kind,
            span: offset.map(|start| start..start + 1),
            message: message.to_string(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    fn build_report(&self, color: bool) -> Report<'static> {
        let offset = self.span.as_ref().map_or(0, |span| span.start);
        let report = Report::build(ReportKind::Error, (), offset)
            .with_config(Config::default().with_color(color));
        // Without a label ariadne prints the header only, so the message goes there.
        let report = match &self.span {
            Some(span) => report.with_message(self.kind.to_string()).with_label(
                Label::new(span.clone())
                    .with_message(&self.message)
                    .with_color(Color::Red),
            ),
            None => report.with_message(format!("{}: {}", self.kind, self.message)),
        };
        report.finish()
    }
}

impl From<LexerError> for Diagnostic {
    fn from(error: LexerError) -> Self {
        Self::new(DiagnosticKind::Lexical, Some(error.offset()), error)
    }
}

impl From<ParserError> for Diagnostic {
    fn from(error: ParserError) -> Self {
        Self::new(DiagnosticKind::Syntax, error.offset(), error)
    }
}

impl From<io::Error> for Diagnostic {
    fn from(error: io::Error) -> Self {
        InterpreterError::Output(error).into()
    }
}

impl From<InterpreterError> for Diagnostic {
    fn from(error: InterpreterError) -> Self {
        Self::new(DiagnosticKind::Runtime, None, error)
    }
}

pub struct DiagnosticPrinter {
    source: Source,
}

impl DiagnosticPrinter {
    pub fn new(input: &str) -> Self {
        Self {
            source: Source::from(input),
        }
    }

    /// Colours are used only when stderr is a terminal.
    pub fn eprint(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let color = io::stderr().is_terminal();
        diagnostic.build_report(color).eprint(&mut self.source)
    }

    /// Renders without colours.
    pub fn format(&mut self, diagnostic: &Diagnostic) -> io::Result<String> {
        let mut buffer = Vec::new();
        diagnostic
            .build_report(false)
            .write(&mut self.source, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnose(source: &str) -> Diagnostic {
        let run = || -> Result<(), Diagnostic> {
            let tokens = lexer::lex(source)?;
            let statements = parser::parse(&tokens)?;
            interpreter::Interpreter::new(io::sink()).interpret(&statements)?;
            Ok(())
        };
        run().unwrap_err()
    }

    #[test]
    fn stage_decides_the_kind() {
        assert_eq!(diagnose("$a = ?").kind(), DiagnosticKind::Lexical);
        assert_eq!(diagnose("$a 1").kind(), DiagnosticKind::Syntax);
        assert_eq!(diagnose("PRINT $a").kind(), DiagnosticKind::Runtime);
    }

    #[test]
    fn lexical_error_is_labelled_at_offset() {
        let diagnostic = diagnose("$a = ?");
        assert_eq!(diagnostic.span, Some(5..6));
        let rendered = DiagnosticPrinter::new("$a = ?").format(&diagnostic).unwrap();
        assert!(rendered.contains("Lexical Error"));
        assert!(rendered.contains("Lexer: unexpected character '?' at offset 5"));
    }

    #[test]
    fn runtime_error_message_is_in_the_header() {
        let diagnostic = diagnose("PRINT $a");
        assert_eq!(diagnostic.span, None);
        let rendered = DiagnosticPrinter::new("PRINT $a").format(&diagnostic).unwrap();
        assert_eq!(
            rendered.lines().next(),
            Some("Error: Runtime Error: Interpreter: undefined variable $a")
        );
    }

    #[test]
    fn every_runtime_failure_shows_its_message() {
        for (source, message) in [
            ("PRINT 1 / 0", "Interpreter: division by zero"),
            ("PRINT \"a\" * 2", "Interpreter: operator '*' needs numeric operands"),
            ("@include", "Interpreter: unsupported statement @include"),
        ] {
            let rendered = DiagnosticPrinter::new(source)
                .format(&diagnose(source))
                .unwrap();
            assert!(rendered.contains(message), "{source}: {rendered}");
        }
    }

    #[test]
    fn colour_is_optional() {
        let diagnostic = diagnose("$a = ?");
        let mut source = Source::from("$a = ?");
        let render = |color: bool, source: &mut Source| {
            let mut buffer = Vec::new();
            diagnostic
                .build_report(color)
                .write(source, &mut buffer)
                .unwrap();
            String::from_utf8(buffer).unwrap()
        };
        assert!(!render(false, &mut source).contains('\x1b'));
        assert!(render(true, &mut source).contains('\x1b'));
    }
}
