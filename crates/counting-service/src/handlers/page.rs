//! HTML bodies returned by the service.

use std::fmt::Write;

use counting_core::error::Result;
use counting_core::InstanceIdentity;

use crate::lifecycle::Termination;

const COUNTING_TITLE: &str = "Simple Counting Service";

/// Landing page pointing callers at the real endpoints.
pub fn info() -> Result<String> {
    let mut out = String::new();
    open(&mut out, "Simple Service", None)?;
    write!(
        out,
        "<h1>Please call service on path '/count'. \
         To explore exit behaviour, use path '/kill' (error) and '/exit' (no error)</h1>"
    )?;
    close(&mut out)?;
    Ok(out)
}

pub fn count(identity: &InstanceIdentity, count: u64) -> Result<String> {
    let mut out = String::new();
    open(&mut out, COUNTING_TITLE, Some(identity))?;
    write!(
        out,
        "<h1>Call to service {}; total calls: {}</h1>",
        escape(identity.id()),
        count
    )?;
    close(&mut out)?;
    Ok(out)
}

pub fn reset(identity: &InstanceIdentity) -> Result<String> {
    let mut out = String::new();
    open(&mut out, COUNTING_TITLE, Some(identity))?;
    write!(out, "<h1>Call to service {}; counter reset!</h1>", escape(identity.id()))?;
    close(&mut out)?;
    Ok(out)
}

pub fn terminating(identity: &InstanceIdentity, t: Termination) -> Result<String> {
    let how = match t {
        Termination::Crash => "terminating with error",
        Termination::Exit => "shutting down",
    };
    let mut out = String::new();
    open(&mut out, COUNTING_TITLE, Some(identity))?;
    write!(
        out,
        "<h1>Call to service {}; {} (exit status {})</h1>",
        escape(identity.id()),
        how,
        t.code()
    )?;
    close(&mut out)?;
    Ok(out)
}

fn open(out: &mut String, title: &str, identity: Option<&InstanceIdentity>) -> Result<()> {
    write!(out, "<html><head><title>{title}</title></head>")?;
    match identity {
        Some(ident) => write!(
            out,
            "<body style=\"border-left: 16px solid {}; padding-left: 8px\">",
            ident.color()
        )?,
        None => write!(out, "<body>")?,
    }
    Ok(())
}

fn close(out: &mut String) -> Result<()> {
    writeln!(out, "</body></html>")?;
    Ok(())
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn count_page_reports_id_and_total() {
        let ident = InstanceIdentity::with_id("12345678");
        let body = count(&ident, 3).unwrap();
        assert!(body.contains("Call to service 12345678; total calls: 3"));
        assert!(body.contains(ident.color()));
    }

    #[test]
    fn ids_are_escaped() {
        let ident = InstanceIdentity::with_id("<b>");
        let body = reset(&ident).unwrap();
        assert!(body.contains("&lt;b&gt;"));
        assert!(!body.contains("<b>;"));
    }
}
