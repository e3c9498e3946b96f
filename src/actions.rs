//! GitHub Actions workflow commands, written to stdout so the runner folds
//! each stage into a collapsible group and annotates warnings and failures.

pub struct Group;

/// Opens a log group that is closed when the returned guard drops.
pub fn group(title: &str) -> Group {
    println!("::group::{}", escape_data(title));
    Group
}

impl Drop for Group {
    fn drop(&mut self) {
        println!("::endgroup::");
    }
}

pub fn warning(message: &str) {
    println!("::warning::{}", escape_data(message));
}

pub fn set_failed(message: &str) {
    println!("::error::{}", escape_data(message));
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_percent_and_newlines() {
        assert_eq!(escape_data("100% done\r\nnext"), "100%25 done%0D%0Anext");
        assert_eq!(escape_data("plain"), "plain");
    }
}
