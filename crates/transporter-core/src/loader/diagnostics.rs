//! Debug dumps of raw inputs

use tracing::debug;

pub(super) fn dump_environment(env: &[String]) {
    debug!("Dumping environment variables:{}", format_dump(env));
}

pub(super) fn dump_cli_arguments(args: &[String]) {
    debug!("Dumping CLI arguments:{}", format_dump(args));
}

fn format_dump(entries: &[String]) -> String {
    entries
        .iter()
        .map(|entry| format!("\n\t\t==> {}", entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dump() {
        let dump = format_dump(&["--age".to_string(), "21".to_string()]);
        assert_eq!(dump, "\n\t\t==> --age\n\t\t==> 21");
        assert_eq!(format_dump(&[]), "");
    }
}
