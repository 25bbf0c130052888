use anyhow::Result;

use crate::shell::{Chrome, SystemLinkOpener};

pub fn run(chrome: &Chrome, print: bool) -> Result<()> {
    if print {
        println!("{}", chrome.repository_url);
        return Ok(());
    }
    chrome.open_repository(&SystemLinkOpener)
}
