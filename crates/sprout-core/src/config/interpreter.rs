//! Python interpreter detection

/// Interpreters tried in order of preference
const PYTHON_INTERPRETERS: &[&str] = &["python3", "python"];

/// Detect the Python interpreter handed to virtualenv's `-p`
pub fn detect_python() -> &'static str {
    for interpreter in PYTHON_INTERPRETERS {
        if std::process::Command::new(interpreter)
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success())
        {
            return interpreter;
        }
    }
    // Default to python3 if nothing detected (virtualenv reports the failure itself)
    PYTHON_INTERPRETERS[0]
}
