//! 查询结果输出

use std::io::{self, Write};

use crossterm::style::Stylize;
use domain_inventory_app::{AppState, CacheStatus};
use domain_inventory_core::types::{
    DomainRecord, FallbackResult, LookupError, LookupOutcome, RefreshOutcome, WhoisInfo,
};

pub const PROMPT: &str = "> Domain to search: ";

pub fn banner(out: &mut impl Write, database: &str) -> io::Result<()> {
    let rule = "#".repeat(78);
    writeln!(out, "{}", rule.as_str().cyan())?;
    writeln!(
        out,
        "{}",
        "| OVH-Cloudflare-GoDaddy-DonDominio NS/Whois search system: Ctrl+C -> Exit".cyan()
    )?;
    writeln!(
        out,
        "{}",
        format!("| v{}: {database}", env!("CARGO_PKG_VERSION")).cyan()
    )?;
    writeln!(out, "{}", rule.as_str().cyan())?;
    writeln!(out)
}

/// 启动阶段对缓存做了什么
pub fn startup_summary(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    let line = match state.cache_status {
        CacheStatus::Reused => "  DB found, using cached inventory",
        CacheStatus::Created => "  DB not found, created and populated",
        CacheStatus::Regenerated => "  DB regenerated",
        CacheStatus::Repopulated => "  DB was empty, repopulated",
    };
    writeln!(out, "{}", line.cyan())?;

    if let Some(outcome) = &state.refresh_outcome {
        refresh_summary(out, outcome)?;
    }
    Ok(())
}

/// 每个 Provider 写入的条数，以及失败项
pub fn refresh_summary(out: &mut impl Write, outcome: &RefreshOutcome) -> io::Result<()> {
    for (provider, count) in &outcome.inserted {
        writeln!(out, "{}", format!("  {provider}: {count} domain(s)").cyan())?;
    }
    for failure in &outcome.failures {
        writeln!(out, "{}", format!("++ ERROR: {failure}").red())?;
    }
    Ok(())
}

pub fn outcome(out: &mut impl Write, result: &LookupOutcome) -> io::Result<()> {
    match result {
        LookupOutcome::Rejected(error) => {
            writeln!(out, "{}", "  Invalid domain".yellow())?;
            writeln!(out, "{}", format!("  {error}").yellow())
        }
        LookupOutcome::Found(records) => {
            for record in records {
                found_record(out, record)?;
            }
            Ok(())
        }
        LookupOutcome::NotFound(fallback) => not_found(out, fallback),
    }
}

pub fn too_long(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "  Invalid domain".yellow())
}

pub fn lookup_error(out: &mut impl Write, error: &impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{}", format!("++ ERROR: {error}").red())
}

fn found_record(out: &mut impl Write, record: &DomainRecord) -> io::Result<()> {
    writeln!(out, "{}", format!("  ID: {}", record.account_id).green())?;
    writeln!(out, "{}", format!("  REALID: {}", record.real_id).green())?;
    writeln!(out, "{}", format!("  PROVIDER: {}", record.provider).green())?;
    writeln!(out, "{}", format!("  DOMAIN: {}", record.domain).green())?;
    writeln!(out)
}

fn not_found(out: &mut impl Write, fallback: &FallbackResult) -> io::Result<()> {
    writeln!(out, "{}", "  NOT FOUND".yellow())?;

    writeln!(out, "{}", "> NS servers:".cyan())?;
    match &fallback.ns_records {
        Ok(records) => {
            for ns in records {
                writeln!(out, "  {ns}")?;
            }
        }
        Err(e) => unavailable(out, "NS lookup", e)?,
    }

    writeln!(out, "{}", "> WHOIS:".cyan())?;
    match &fallback.whois {
        Ok(info) => whois(out, info)?,
        Err(e) => unavailable(out, "WHOIS lookup", e)?,
    }
    writeln!(out)
}

fn whois(out: &mut impl Write, info: &WhoisInfo) -> io::Result<()> {
    let fields = [
        ("Registrar", &info.registrar),
        ("Created", &info.creation_date),
        ("Expires", &info.expiration_date),
        ("Updated", &info.updated_date),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            writeln!(out, "  {label}: {value}")?;
        }
    }
    if !info.name_servers.is_empty() {
        writeln!(out, "  Name servers: {}", info.name_servers.join(", "))?;
    }
    if !info.status.is_empty() {
        writeln!(out, "  Status: {}", info.status.join(", "))?;
    }
    if info.is_empty() {
        writeln!(out, "{}", "  No parsable WHOIS fields".yellow())?;
    }
    Ok(())
}

fn unavailable(out: &mut impl Write, what: &str, error: &LookupError) -> io::Result<()> {
    let line = format!("  {what} unavailable: {error}");
    match error {
        LookupError::NotFound(_) => writeln!(out, "{}", line.yellow()),
        _ => writeln!(out, "{}", line.red()),
    }
}
