pub(crate) const NEGATION_PREFIX: &str = "no-";
pub(crate) const IMPLICIT_TRUE: &str = "true";
pub(crate) const LIST_MARKER: &str = "[+]";
pub(crate) const LIST_HELP: &str = "[+] marked option can be specified multiple times";
pub(crate) const USAGE_INDENT: usize = 2;
pub(crate) const USAGE_SEPARATOR: &str = " - ";
