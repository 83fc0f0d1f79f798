//! Generate command.
//!
//! Materializes `.env` from `.env.example` with fresh secrets and writes the
//! `.secrets.txt` backup.

use tracing::{info, warn};

use crate::cli::output;
use crate::core::audit::{self, IgnoreAudit};
use crate::core::catalog::{Catalog, PlaceholderMap};
use crate::core::constants::{BACKUP_FILE, ENV_FILE};
use crate::core::generator;
use crate::core::layout::Layout;
use crate::core::template;
use crate::core::writer::{self, Confirm, OverwritePolicy, WriteOutcome};
use crate::error::Result;

/// Run a full bootstrap in `layout`.
///
/// Returns `Declined` when the operator refuses to overwrite `.env`; no file
/// has been written in that case.
pub fn execute(
    layout: &Layout,
    catalog: &Catalog,
    mapping: &PlaceholderMap,
    policy: OverwritePolicy,
    confirm: &mut dyn Confirm,
) -> Result<WriteOutcome> {
    output::header("Local Development Secret Generator");
    output::rule();
    output::kv("directory", output::path(layout.base().display()));
    output::blank();

    let document = template::load(&layout.template())?;

    let secrets = generator::generate_all(catalog)?;
    info!("generated {} secrets", secrets.len());

    let substitutions = template::resolve(mapping, &secrets)?;
    let rendered = template::render(&document, &substitutions);

    let live = layout.live();
    if writer::write_live(&live, &rendered.content, policy, confirm)? == WriteOutcome::Declined {
        output::dimmed("Aborted. No changes made.");
        return Ok(WriteOutcome::Declined);
    }

    let backup = layout.backup();
    writer::write_backup(&backup, &secrets)?;

    output::success(&format!("generated {}", output::path(live.display())));
    output::success(&format!(
        "secrets backup saved to {}",
        output::path(backup.display())
    ));

    if !rendered.unmatched.is_empty() {
        warn!(
            "{} placeholder(s) not found in template",
            rendered.unmatched.len()
        );
        output::blank();
        output::warn(&format!(
            "placeholders not found in {}; these secrets were not applied:",
            output::path(layout.template().display())
        ));
        for name in &rendered.unmatched {
            output::list_item(&output::key(name));
        }
    }

    output::section("Generated secrets");
    for secret in secrets.iter() {
        output::kv(&format!("{}:", secret.name()), "<generated>");
    }
    output::rule();

    output::blank();
    output::warn("keep these secrets secure and never commit them to version control");
    output::dimmed(&format!(
        "{} and {} should be listed in your .gitignore",
        ENV_FILE, BACKUP_FILE
    ));

    report_ignore_audit(audit::audit_ignore_rules(
        layout.base(),
        ENV_FILE,
        BACKUP_FILE,
    ));

    output::section("Next steps");
    output::list_item(&format!("review the generated {} file", ENV_FILE));
    output::list_item("start the local services (e.g. docker compose up -d)");
    output::list_item(&format!(
        "store {} in a secure location (password manager, encrypted vault)",
        BACKUP_FILE
    ));

    Ok(WriteOutcome::Written)
}

/// Print the advisory for an ignore-file audit. Never fails the run.
fn report_ignore_audit(result: Result<IgnoreAudit>) {
    match result {
        Ok(IgnoreAudit::Covered) => {}
        Ok(IgnoreAudit::Missing(entries)) => {
            output::blank();
            output::warn("add these entries to .gitignore:");
            for entry in &entries {
                output::list_item(entry);
            }
        }
        Ok(IgnoreAudit::Absent(path)) => {
            output::blank();
            output::warn(&format!("no .gitignore found at {}", output::path(path.display())));
            output::hint(&format!("create one and add: {} and {}", ENV_FILE, BACKUP_FILE));
        }
        Err(e) => {
            warn!("ignore audit failed: {}", e);
            output::blank();
            output::warn(&format!("could not check .gitignore: {}", e));
        }
    }
}
