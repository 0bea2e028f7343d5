//! WHOIS lookup module.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use whois_rust::{WhoIs, WhoIsError, WhoIsLookupOptions};

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::WhoisResult;

/// Compile a list of patterns once; invalid patterns are skipped.
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| Regex::new(p).ok()).collect()
}

static REGISTRAR: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)^\s*Registrar:\s*(.+)$",
        r"(?im)^\s*Registrar Name:\s*(.+)$",
        r"(?im)^\s*Sponsoring Registrar:\s*(.+)$",
        r"(?im)^\s*registrar\.\.+:\s*(.+)$",
    ])
});

static CREATED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)^\s*Creation Date:\s*(.+)$",
        r"(?im)^\s*Created Date:\s*(.+)$",
        r"(?im)^\s*Created:\s*(.+)$",
        r"(?im)^\s*Registration Date:\s*(.+)$",
        r"(?im)^\s*Fecha de registro:\s*(.+)$",
    ])
});

static EXPIRES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)^\s*Registry Expiry Date:\s*(.+)$",
        r"(?im)^\s*Expir(?:y|ation) Date:\s*(.+)$",
        r"(?im)^\s*paid-till:\s*(.+)$",
        r"(?im)^\s*Fecha de expiraci[oó]n:\s*(.+)$",
    ])
});

static UPDATED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)^\s*Updated Date:\s*(.+)$",
        r"(?im)^\s*Last Updated:\s*(.+)$",
        r"(?im)^\s*Last Modified:\s*(.+)$",
        r"(?im)^\s*changed:\s*(.+)$",
    ])
});

static NAME_SERVERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)^\s*Name Server:\s*(\S+)",
        r"(?im)^\s*nserver:\s*(\S+)",
    ])
});

static STATUS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[r"(?im)^\s*Domain Status:\s*(\S+)", r"(?im)^\s*status:\s*(\S+)"])
});

/// Registries answer unknown names with a free-text notice instead of an error.
static NO_MATCH: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)^\s*No match for",
        r"(?i)^\s*NOT FOUND",
        r"(?i)^\s*No Data Found",
        r"(?i)^\s*No entries found",
        r"(?i)^\s*Domain not found",
        r"(?i)^\s*The queried object does not exist",
    ])
});

/// Perform a WHOIS lookup for a domain.
///
/// TLDs missing from the map go to IANA first and follow its `refer:` line.
pub async fn whois_lookup(
    domain: &str,
    whois_servers: &str,
    timeout: Duration,
) -> ToolboxResult<WhoisResult> {
    let whois = WhoIs::from_string(whois_servers).map_err(|e| {
        ToolboxError::NetworkError(format!("Failed to initialize WHOIS client: {e}"))
    })?;

    let mut options = WhoIsLookupOptions::from_string(domain)
        .map_err(|e| ToolboxError::ValidationError(format!("Invalid domain: {e}")))?;
    options.timeout = Some(timeout);

    log::debug!("WHOIS lookup {domain}");
    let raw = whois
        .lookup_async(options)
        .await
        .map_err(|e| lookup_error(domain, timeout, e))?;

    if is_no_match(&raw) {
        return Err(ToolboxError::NotFound(format!(
            "WHOIS has no record for {domain}"
        )));
    }

    Ok(parse_whois_response(domain, &raw))
}

fn lookup_error(domain: &str, timeout: Duration, error: WhoIsError) -> ToolboxError {
    match error {
        WhoIsError::MapError(reason) => {
            ToolboxError::NotFound(format!("No WHOIS server for {domain}: {reason}"))
        }
        error @ WhoIsError::HostError(_) => {
            ToolboxError::ValidationError(format!("Invalid domain: {error}"))
        }
        WhoIsError::Elapsed(_) => ToolboxError::Timeout(timeout.as_secs()),
        other => ToolboxError::NetworkError(format!("WHOIS query failed: {other}")),
    }
}

fn is_no_match(raw: &str) -> bool {
    raw.trim().is_empty() || NO_MATCH.iter().any(|re| raw.lines().any(|l| re.is_match(l)))
}

/// Parse structured fields from a raw WHOIS response.
fn parse_whois_response(domain: &str, raw: &str) -> WhoisResult {
    WhoisResult {
        domain: domain.to_string(),
        registrar: first_match(raw, &REGISTRAR),
        creation_date: first_match(raw, &CREATED),
        expiration_date: first_match(raw, &EXPIRES),
        updated_date: first_match(raw, &UPDATED),
        name_servers: all_matches(raw, &NAME_SERVERS, true),
        status: all_matches(raw, &STATUS, false),
        raw: raw.to_string(),
    }
}

/// First non-empty capture across the patterns, in pattern order.
fn first_match(text: &str, patterns: &[Regex]) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

/// Every capture across the patterns, deduplicated in order of appearance.
fn all_matches(text: &str, patterns: &[Regex], lowercase: bool) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for re in patterns {
        for caps in re.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            let mut value = m.as_str().trim().trim_end_matches('.').to_string();
            if lowercase {
                value = value.to_lowercase();
            }
            if !value.is_empty() && !values.contains(&value) {
                values.push(value);
            }
        }
    }
    values
}
