//! Evaluation-state code translation
//!
//! The patch agent reports each update's lifecycle stage as an integer.
//! Codes 0 through 23 have fixed labels; anything else passes through as the
//! number itself rather than an error, so records stay printable when an
//! agent newer than this table shows up.

/// Translate an evaluation-state code into its label
pub fn translate(code: i32) -> String {
    let label = match code {
        0 => "None(0)",
        1 => "Available",
        2 => "Submitted",
        3 => "Detecting",
        4 => "PreDownload",
        5 => "Downloading",
        6 => "WaitInstall",
        7 => "Installing",
        8 => "PendingSoftReboot",
        9 => "PendingHardReboot",
        10 => "WaitReboot",
        11 => "Verifying",
        12 => "InstallComplete",
        13 => "Error",
        14 => "WaitServiceWindow",
        15 => "WaitUserLogon",
        16 => "WaitUserLogoff",
        17 => "WaitJobUserLogon",
        18 => "WaitUserReconnect",
        19 => "PendingUserLogoff",
        20 => "PendingUpdate",
        21 => "WaitingRetry",
        22 => "WaitPresModeOff",
        23 => "WaitForOrchestration",
        other => return other.to_string(),
    };
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(translate(0), "None(0)");
        assert_eq!(translate(5), "Downloading");
        assert_eq!(translate(7), "Installing");
        assert_eq!(translate(8), "PendingSoftReboot");
        assert_eq!(translate(13), "Error");
        assert_eq!(translate(23), "WaitForOrchestration");
    }

    #[test]
    fn test_every_table_code_has_a_label() {
        for code in 0..=23 {
            let label = translate(code);
            assert_ne!(label, code.to_string(), "code {code} fell through");
        }
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        assert_eq!(translate(-1), "-1");
        assert_eq!(translate(24), "24");
        assert_eq!(translate(99), "99");
    }
}
