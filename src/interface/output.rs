use crate::lens::{CodeLensList, LensAction};

/// Message severity, from always shown to only shown with `--verbose`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
    Verbose,
}

impl LogLevel {
    fn icon(self) -> Option<&'static str> {
        match self {
            LogLevel::Error => Some("❌"),
            LogLevel::Warning => Some("⚠️"),
            LogLevel::Info => None,
            LogLevel::Debug => Some("🔍"),
            LogLevel::Verbose => Some("💬"),
        }
    }
}

/// Writes diagnostics to stderr so generated source on stdout stays clean
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    max_level: LogLevel,
}

impl Logger {
    pub fn new(verbose: bool, debug: bool) -> Self {
        let max_level = if verbose {
            LogLevel::Verbose
        } else if debug {
            LogLevel::Debug
        } else {
            LogLevel::Info
        };
        Self { max_level }
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.should_log(level) {
            return;
        }
        match level.icon() {
            Some(icon) => eprintln!("{} {}", icon, message),
            None => eprintln!("{}", message),
        }
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log(LogLevel::Verbose, message);
    }
}

/// One line per lens: `<line>: <title> [<detail>]`
pub fn format_lenses(lenses: &CodeLensList) -> Vec<String> {
    lenses
        .iter()
        .map(|lens| {
            let detail = match &lens.action {
                LensAction::Deploy => String::new(),
                LensAction::Invoke(command) => format!(" {}", command.entry_point),
                LensAction::Subscribe { indent } => format!(" (indent {})", indent),
            };
            format!("{:>5}: {}{}", lens.line, lens.title, detail)
        })
        .collect()
}

pub fn print_lenses(source_name: &str, lenses: &CodeLensList) {
    println!(
        "📄 {} ({} lens{})",
        source_name,
        lenses.len(),
        if lenses.len() == 1 { "" } else { "es" }
    );
    for line in format_lenses(lenses) {
        println!("{}", line);
    }
}

pub fn print_usage_info(output_path: &str, contract_name: &str) {
    println!("\n✓ Generated contract {}", contract_name);
    println!("📁 Location: {}", output_path);
    println!("\n💡 Build it with:");
    println!("  soroban contract build");
}
