//! Shell classification and file permission probes.

use std::path::Path;

/// Known shell types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Ksh,
    Sh,
    Fish,
    PowerShell,
    Cmd,
    Unknown,
}

impl ShellType {
    /// Parse shell type from executable name.
    pub fn from_executable(exe: &str) -> Self {
        let name = Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => ShellType::Bash,
            "zsh" => ShellType::Zsh,
            "ksh" | "ksh93" | "mksh" => ShellType::Ksh,
            "sh" | "dash" | "ash" => ShellType::Sh,
            "fish" => ShellType::Fish,
            "powershell" | "pwsh" => ShellType::PowerShell,
            "cmd" => ShellType::Cmd,
            _ => ShellType::Unknown,
        }
    }

    /// Whether `<shell> -n <script>` parses without executing.
    pub fn supports_syntax_check(self) -> bool {
        matches!(
            self,
            ShellType::Bash | ShellType::Zsh | ShellType::Ksh | ShellType::Sh | ShellType::Fish
        )
    }

    /// Whether the shell understands `source` and `declare -f`.
    pub fn supports_function_probe(self) -> bool {
        matches!(self, ShellType::Bash | ShellType::Zsh | ShellType::Ksh)
    }
}

/// Check whether the current user may execute `path`.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };

    // SAFETY: access() reads the NUL-terminated path and touches no other memory.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

/// Check whether the current user may execute `path`.
///
/// Windows has no execute bit; an existing regular file counts.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_type_from_executable() {
        assert_eq!(ShellType::from_executable("/bin/bash"), ShellType::Bash);
        assert_eq!(ShellType::from_executable("/usr/bin/zsh"), ShellType::Zsh);
        assert_eq!(ShellType::from_executable("dash"), ShellType::Sh);
        assert_eq!(ShellType::from_executable("/bin/ksh93"), ShellType::Ksh);
        assert_eq!(ShellType::from_executable("pwsh"), ShellType::PowerShell);
        assert_eq!(ShellType::from_executable("cmd.exe"), ShellType::Cmd);
        assert_eq!(ShellType::from_executable("unknown"), ShellType::Unknown);
    }

    #[test]
    fn syntax_check_support() {
        assert!(ShellType::Bash.supports_syntax_check());
        assert!(ShellType::Sh.supports_syntax_check());
        assert!(!ShellType::Cmd.supports_syntax_check());
        assert!(!ShellType::Unknown.supports_syntax_check());
    }

    #[test]
    fn function_probe_support() {
        assert!(ShellType::Bash.supports_function_probe());
        assert!(!ShellType::Sh.supports_function_probe());
        assert!(!ShellType::Fish.supports_function_probe());
    }

    #[cfg(unix)]
    #[test]
    fn executable_bit_is_detected() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("run.sh");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();

        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!is_executable(&script));

        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert!(is_executable(&script));
    }

    #[test]
    fn missing_file_is_not_executable() {
        assert!(!is_executable(Path::new("/definitely/not/here.sh")));
    }
}
