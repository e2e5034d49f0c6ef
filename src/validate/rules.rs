/// Preconditions for each built-in command.
///
/// Checks run in the order written; the first failure wins.
use super::Rejection;
use crate::confirm::{Confirm, confirm_unless_forced};
use crate::invocation::ParsedInvocation;
use crate::registry::table::NEWLINE_DELIMITED_JSON;

/// Required prefix of `load`'s SOURCE argument.
pub const S3_SCHEME: &str = "s3://";

type Check = Result<(), Rejection>;

fn require_bucket(inv: &ParsedInvocation<'_>) -> Check {
    if inv.text("bucket").is_empty() {
        return Err(Rejection::usage("bucket must be specified."));
    }
    Ok(())
}

fn require_arg(inv: &ParsedInvocation<'_>, message: &str) -> Check {
    if inv.args().is_empty() {
        return Err(Rejection::usage(message));
    }
    Ok(())
}

fn name_parts(name: &str) -> usize {
    name.split('.').count()
}

pub fn query(inv: &ParsedInvocation<'_>, _: &dyn Confirm) -> Check {
    require_arg(inv, "QUERY must be specified.")?;
    require_bucket(inv)
}

pub fn ls(inv: &ParsedInvocation<'_>, _: &dyn Confirm) -> Check {
    require_bucket(inv)
}

pub fn head(inv: &ParsedInvocation<'_>, _: &dyn Confirm) -> Check {
    require_bucket(inv)?;
    require_arg(inv, "DATABASE and TABLE must be specified.")?;
    if inv.arg(0).map(name_parts) != Some(2) {
        return Err(Rejection::usage("[DATABASE].[TABLE] must contain `.`."));
    }
    Ok(())
}

pub fn mk(inv: &ParsedInvocation<'_>, _: &dyn Confirm) -> Check {
    require_bucket(inv)?;
    require_arg(inv, "DATABASE must be specified.")?;
    if inv.arg(0).map_or(0, name_parts) >= 2 {
        return Err(Rejection::usage(
            "If you want to create table, use `load` subcommand.",
        ));
    }
    Ok(())
}

pub fn rm(inv: &ParsedInvocation<'_>, confirm: &dyn Confirm) -> Check {
    require_bucket(inv)?;
    require_arg(inv, "NAME must be specified.")?;
    let name = inv.arg(0).unwrap_or_default();
    if !confirm_unless_forced(confirm, inv.switch("force"), &format!("Would you remove {name}")) {
        return Err(Rejection::Canceled);
    }
    Ok(())
}

pub fn load(inv: &ParsedInvocation<'_>, _: &dyn Confirm) -> Check {
    require_bucket(inv)?;
    if !inv.arg(1).unwrap_or_default().starts_with(S3_SCHEME) {
        return Err(Rejection::usage("`SOURCE` must start with 's3://'"));
    }
    if inv.text("source_format") != NEWLINE_DELIMITED_JSON {
        return Err(Rejection::usage(
            "Now aq support only NEWLINE_DELIMITED_JSON.",
        ));
    }
    Ok(())
}
