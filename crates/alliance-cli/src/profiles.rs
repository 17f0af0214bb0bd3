//! Read-only profile listing.

use std::path::Path;

use alliance_core::{load_profiles, Profile, ProfileKind, ProfilesFile};

/// Print the profiles in the collection, optionally limited to one kind.
///
/// # Errors
///
/// Returns an error if the profile collection cannot be loaded.
pub(crate) fn run_profiles_list(path: &Path, kind: Option<ProfileKind>) -> anyhow::Result<()> {
    let profiles = load_profiles(path)?;
    let selected = select_profiles(&profiles, kind);

    if selected.is_empty() {
        println!(
            "no profiles found{} in {}",
            kind.map(|k| format!(" of type {k}")).unwrap_or_default(),
            path.display()
        );
        return Ok(());
    }

    print!("{}", render_profiles(&selected));
    Ok(())
}

fn select_profiles(profiles: &ProfilesFile, kind: Option<ProfileKind>) -> Vec<&Profile> {
    match kind {
        Some(kind) => profiles.by_kind(kind).collect(),
        None => profiles.profiles.iter().collect(),
    }
}

fn render_profiles(profiles: &[&Profile]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12}{:<14}{:<26}{:<16}VALUES",
        "ID", "TYPE", "NAME", "CATEGORY"
    );
    for profile in profiles {
        let _ = writeln!(
            out,
            "{:<12}{:<14}{:<26}{:<16}{}",
            profile.id(),
            profile.kind().to_string(),
            profile.name(),
            profile.category(),
            profile.values().join(", ")
        );
        if !profile.description().is_empty() {
            let _ = writeln!(out, "            {}", profile.description());
        }
        if !profile.partnership_types().is_empty() {
            let _ = writeln!(
                out,
                "            partnerships: {}",
                profile.partnership_types().join(", ")
            );
        }
    }
    out
}
