//! Environment-shaping prefixes placed in front of every scenario command

use chrono::NaiveDateTime;
use std::path::Path;

/// Marker that keeps faketime away from `stat` results
pub const NO_FAKE_STAT: &str = "NO_FAKE_STAT=1 ";

/// Puts the fake uname library in front of whatever `LD_PRELOAD` already
/// holds (libfaketime when the time layer is active), then runs the rest
const PRELOAD_FAKE_UNAME: &str =
    r#"export LD_PRELOAD="$FAKE_UNAME_LIB${LD_PRELOAD:+:$LD_PRELOAD}"; exec "$@""#;

/// Quote a value for a POSIX shell
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Prefixes that virtualize time, kernel release and locale.
///
/// Layers are applied in a fixed order: time, kernel, locale, then the
/// command itself. An unset layer contributes nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandPrefixes {
    pub faketime: Option<String>,
    pub kernel_release: Option<String>,
    pub lc_all: Option<String>,
}

impl CommandPrefixes {
    pub fn set_faketime(&mut self, at: NaiveDateTime) {
        self.faketime = Some(format!(
            "faketime {} ",
            shell_quote(&at.format("%Y-%m-%d %H:%M:%S").to_string())
        ));
    }

    pub fn set_kernel_release(&mut self, release: &str, fake_uname_lib: &Path) {
        self.kernel_release = Some(format!(
            "env FAKE_KERNEL_RELEASE={} FAKE_UNAME_LIB={} sh -c {} sh ",
            shell_quote(release),
            shell_quote(&fake_uname_lib.to_string_lossy()),
            shell_quote(PRELOAD_FAKE_UNAME)
        ));
    }

    pub fn set_lc_all(&mut self, locale: &str) {
        self.lc_all = Some(format!("env LC_ALL={} ", shell_quote(locale)));
    }

    fn layers(&self) -> [Option<String>; 3] {
        [
            self.faketime
                .as_ref()
                .map(|prefix| format!("{}{}", NO_FAKE_STAT, prefix)),
            self.kernel_release.clone(),
            self.lc_all.clone(),
        ]
    }

    /// Final command string with every active layer prepended
    pub fn apply(&self, command: &str) -> String {
        self.layers()
            .into_iter()
            .flatten()
            .chain(std::iter::once(command.to_string()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.layers().iter().all(Option::is_none)
    }
}
