//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const INSTALL_SH: &str = r#"#!/usr/bin/env bash

detect_os() {
    case "$(uname -s)" in
        Linux*) echo "linux" ;;
        Darwin*) echo "macos" ;;
        *) echo "unknown" ;;
    esac
}

check_python() {
    command -v python3 >/dev/null 2>&1
}

install_2do() {
    echo "Installing 2do"
}

main() {
    detect_os
    check_python
    install_2do
}

if [[ "${BASH_SOURCE[0]}" == "${0}" ]]; then
    main "$@"
fi
"#;

pub const INSTALL_PS1: &str = "Write-Host 'Installing 2do'\n";

pub const PYPROJECT: &str = r#"[project]
name = "2do"
version = "0.1.0"

[project.scripts]
2do = "two_do.cli:main"
"#;

pub const README: &str = r#"# 2do

## Installation

```bash
curl -fsSL https://example.com/install.sh | bash
```

```powershell
iwr -useb https://example.com/install.ps1 | iex
```
"#;

/// Write a file, creating parent directories.
pub fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[cfg(unix)]
pub fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) {}

/// Write the primary installer and mark it executable.
pub fn write_installer(root: &Path, content: &str) {
    write(root, "install.sh", content);
    make_executable(&root.join("install.sh"));
}

/// A project where every check passes.
pub fn complete_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_installer(temp.path(), INSTALL_SH);
    write(temp.path(), "install.ps1", INSTALL_PS1);
    write(temp.path(), "pyproject.toml", PYPROJECT);
    write(temp.path(), "README.md", README);
    temp
}
