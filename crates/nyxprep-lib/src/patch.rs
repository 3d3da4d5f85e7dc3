use crate::config::LoggerConfig;
use crate::error::NyxPrepError;
use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// Column of the trailing backslash on each continued line of the `MG_LOG` macro.
const CONTINUATION_COLUMN: usize = 52;

/// Replaces the upstream `#if <guard> ... #endif` logging block with a shim that
/// forwards `MG_LOG` to project-provided symbols.
#[derive(Clone, Debug)]
pub struct LoggerPatch {
    guard: String,
    pattern: Regex,
    shim: String,
}

/// Result of applying a [`LoggerPatch`] to one file.
#[derive(Debug)]
pub struct Patched<'a> {
    text: Cow<'a, str>,
}

impl Patched<'_> {
    /// Whether any guarded block was found and replaced.
    pub fn is_applied(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text.into_owned()
    }
}

impl LoggerPatch {
    pub fn new(logger: &LoggerConfig) -> Result<Self, NyxPrepError> {
        let pattern = Regex::new(&format!(
            r"(?s)#if\s+{}.*?#endif",
            regex::escape(&logger.guard)
        ))?;

        Ok(Self {
            guard: logger.guard.clone(),
            pattern,
            shim: render_shim(&logger.level_symbol, &logger.log_function),
        })
    }

    pub fn guard(&self) -> &str {
        &self.guard
    }

    pub fn shim(&self) -> &str {
        &self.shim
    }

    /// Replaces every guarded block. Text without one passes through untouched.
    pub fn apply<'a>(&self, source: &'a str) -> Patched<'a> {
        Patched {
            text: self.pattern.replace_all(source, NoExpand(&self.shim)),
        }
    }
}

/// Renders the shim text, without a leading newline and ending with one.
pub fn render_shim(level_symbol: &str, log_function: &str) -> String {
    let mut shim = format!(
        "extern int {level_symbol};\n\nvoid {log_function}(const char *fmt, ...);\n\n"
    );

    for line in [
        "#define MG_LOG(level, args)".to_string(),
        "            do {".to_string(),
        format!("                {level_symbol} = (level);"),
        format!("                {log_function} args;"),
    ] {
        shim.push_str(&continued(&line));
        shim.push('\n');
    }
    shim.push_str("            } while(0)\n");

    shim
}

fn continued(line: &str) -> String {
    if line.len() < CONTINUATION_COLUMN {
        format!("{line:<width$}\\", width = CONTINUATION_COLUMN)
    } else {
        format!("{line} \\")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_SHIM: &str = "extern int mg_to_indi_log_level;

void mg_to_indi_log_int(const char *fmt, ...);

#define MG_LOG(level, args)                         \\
            do {                                    \\
                mg_to_indi_log_level = (level);     \\
                mg_to_indi_log_int args;            \\
            } while(0)
";

    fn default_patch() -> LoggerPatch {
        LoggerPatch::new(&LoggerConfig::default()).unwrap()
    }

    #[test]
    fn test_default_shim_text() {
        assert_eq!(default_patch().shim(), DEFAULT_SHIM);
    }

    #[test]
    fn test_shim_with_other_symbol_pair() {
        let shim = render_shim("nyx_curr_log_level", "nyx_log");

        assert!(shim.starts_with("extern int nyx_curr_log_level;\n\nvoid nyx_log(const char *fmt, ...);\n"));
        for line in shim.lines().filter(|line| line.ends_with('\\')) {
            assert_eq!(line.len(), CONTINUATION_COLUMN + 1, "misaligned: {line:?}");
        }
    }

    #[test]
    fn test_shim_with_long_symbol_keeps_separator() {
        let long_symbol = "a_really_long_logging_level_symbol_name_for_testing";
        let shim = render_shim(long_symbol, "log_fn");

        assert!(shim.contains(&format!("                {long_symbol} = (level); \\\n")));
    }

    #[test]
    fn test_apply_replaces_guarded_block() {
        let patch = default_patch();
        let patched = patch.apply("... #if MG_ENABLE_LOG\nfoo\n#endif\nbar");

        assert!(patched.is_applied());
        assert_eq!(patched.as_str(), format!("... {DEFAULT_SHIM}\nbar"));
    }

    #[test]
    fn test_apply_leaves_no_residue_of_block() {
        let source = "#include <stdio.h>\n#if   MG_ENABLE_LOG\n#define MG_LOG(l, a) upstream(l, a)\n#else\n#define MG_LOG(l, a)\n#endif\nint x;\n";
        let patched = default_patch().apply(source).into_string();

        assert!(patched.contains(DEFAULT_SHIM));
        assert!(!patched.contains("#if   MG_ENABLE_LOG"));
        assert!(!patched.contains("#endif"));
        assert!(!patched.contains("upstream(l, a)"));
        assert!(patched.starts_with("#include <stdio.h>\n"));
        assert!(patched.ends_with("\nint x;\n"));
    }

    #[test]
    fn test_apply_stops_at_first_endif() {
        let source = "#if MG_ENABLE_LOG\nlog\n#endif\nkeep\n#if OTHER\nx\n#endif\n";
        let patched = default_patch().apply(source).into_string();

        assert_eq!(patched, format!("{DEFAULT_SHIM}\nkeep\n#if OTHER\nx\n#endif\n"));
    }

    #[test]
    fn test_apply_replaces_every_block() {
        let source = "#if MG_ENABLE_LOG\na\n#endif\n#if MG_ENABLE_LOG\nb\n#endif\n";
        let patched = default_patch().apply(source);

        assert!(patched.is_applied());
        assert_eq!(patched.as_str(), format!("{DEFAULT_SHIM}\n{DEFAULT_SHIM}\n"));
    }

    #[test]
    fn test_apply_passes_through_without_block() {
        let source = "#if MG_ENABLE_SSI\nssi\n#endif\n";
        let patched = default_patch().apply(source);

        assert!(!patched.is_applied());
        assert_eq!(patched.as_str(), source);
    }

    #[test]
    fn test_apply_requires_whitespace_after_if() {
        let source = "#ifMG_ENABLE_LOG\nfoo\n#endif\n";
        assert!(!default_patch().apply(source).is_applied());
    }

    #[test]
    fn test_apply_inserts_shim_literally() {
        let logger = LoggerConfig {
            level_symbol: "$level".to_string(),
            log_function: "${1}".to_string(),
            ..LoggerConfig::default()
        };
        let patch = LoggerPatch::new(&logger).unwrap();
        let patched = patch.apply("#if MG_ENABLE_LOG\n#endif").into_string();

        assert_eq!(patched, patch.shim());
        assert!(patched.contains("extern int $level;"));
    }

    #[test]
    fn test_custom_guard_is_escaped() {
        let logger = LoggerConfig {
            guard: "LOG.ON".to_string(),
            ..LoggerConfig::default()
        };
        let patch = LoggerPatch::new(&logger).unwrap();

        assert!(patch.apply("#if LOG.ON\n#endif").is_applied());
        assert!(!patch.apply("#if LOGxON\n#endif").is_applied());
    }
}
