//! Property-based tests for the show-pubkey command

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use clap::Parser;
    use proptest::prelude::*;

    use crate::output::{BASE64_LABEL, HEX_LABEL};
    use crate::{Cli, ExitCode};

    fn run(args: &[&str]) -> (ExitCode, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let cli = Cli::try_parse_from(args).unwrap();
        let code = cli.execute(&mut stdout, &mut stderr).unwrap();
        (
            code,
            String::from_utf8(stdout).unwrap(),
            String::from_utf8(stderr).unwrap(),
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Hex and base64 lines always describe the same 32 bytes
        #[test]
        fn test_text_output_lines_agree(bytes in any::<[u8; 32]>()) {
            let input = hex::encode(bytes);
            let (code, stdout, stderr) = run(&["show-pubkey", &input]);

            prop_assert_eq!(code, ExitCode::Success);
            prop_assert!(stderr.is_empty());

            let lines: Vec<&str> = stdout.lines().collect();
            prop_assert_eq!(lines.len(), 2);

            let hex_part = lines[0].strip_prefix(HEX_LABEL).unwrap();
            let b64_part = lines[1].strip_prefix(BASE64_LABEL).unwrap();

            prop_assert_eq!(hex_part.len(), 64);
            prop_assert!(hex_part.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
            prop_assert_eq!(b64_part.len(), 44);
            prop_assert_eq!(hex::decode(hex_part).unwrap(), STANDARD.decode(b64_part).unwrap());
        }

        // Case of the input digits does not change the result
        #[test]
        fn test_input_case_insensitive(bytes in any::<[u8; 32]>()) {
            let lower = hex::encode(bytes);
            let upper = hex::encode_upper(bytes);

            let (_, a, _) = run(&["show-pubkey", &lower]);
            let (_, b, _) = run(&["show-pubkey", &upper]);
            prop_assert_eq!(a, b);
        }

        // Rejected inputs never produce partial output
        #[test]
        fn test_invalid_input_no_stdout(s in "[0-9a-zA-Z]{0,80}") {
            prop_assume!(!(s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit())));

            let (code, stdout, stderr) = run(&["show-pubkey", &s]);
            prop_assert_eq!(code, ExitCode::InvalidInput);
            prop_assert!(stdout.is_empty());
            prop_assert!(stderr.starts_with("Error: "));
        }
    }
}
