use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["alliance"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.profiles.is_none());
    assert!(cli.tuning.is_none());
}

#[test]
fn parses_profiles_without_kind() {
    let cli = Cli::try_parse_from(["alliance", "profiles"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Profiles { kind: None })));
}

#[test]
fn parses_profiles_with_kind() {
    let cli = Cli::try_parse_from(["alliance", "profiles", "--kind", "organization"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Profiles {
            kind: Some(KindArg::Organization)
        })
    ));
}

#[test]
fn rejects_unknown_profile_kind() {
    assert!(Cli::try_parse_from(["alliance", "profiles", "--kind", "agency"]).is_err());
}

#[test]
fn parses_match_with_defaults() {
    let cli = Cli::try_parse_from(["alliance", "match", "--profile", "brand_1"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Match {
            profile,
            industries,
            priority,
            min_score,
            json,
        }) => {
            assert_eq!(profile, "brand_1");
            assert!(industries.is_empty());
            assert_eq!(priority, Dimension::Values);
            assert_eq!(min_score, None);
            assert!(!json);
        }
        other => panic!("expected match command, got {other:?}"),
    }
}

#[test]
fn parses_match_with_all_flags() {
    let cli = Cli::try_parse_from([
        "alliance",
        "match",
        "--profile",
        "org_1",
        "--industry",
        "technology",
        "--industry",
        "retail",
        "--priority",
        "industry",
        "--min-score",
        "60",
        "--json",
    ])
    .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Match {
            profile,
            industries,
            priority,
            min_score,
            json,
        }) => {
            assert_eq!(profile, "org_1");
            assert_eq!(industries, vec!["technology", "retail"]);
            assert_eq!(priority, Dimension::Industry);
            assert_eq!(min_score, Some(60));
            assert!(json);
        }
        other => panic!("expected match command, got {other:?}"),
    }
}

#[test]
fn match_requires_profile() {
    assert!(Cli::try_parse_from(["alliance", "match"]).is_err());
}

#[test]
fn rejects_unknown_priority() {
    let result = Cli::try_parse_from([
        "alliance",
        "match",
        "--profile",
        "brand_1",
        "--priority",
        "budget",
    ]);
    assert!(result.is_err());
}

#[test]
fn rejects_min_score_above_100() {
    let result = Cli::try_parse_from([
        "alliance",
        "match",
        "--profile",
        "brand_1",
        "--min-score",
        "101",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_roi_command() {
    let cli = Cli::try_parse_from(["alliance", "roi", "--input", "deal.yaml", "--json"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Roi { input, json }) => {
            assert_eq!(input, PathBuf::from("deal.yaml"));
            assert!(json);
        }
        other => panic!("expected roi command, got {other:?}"),
    }
}

#[test]
fn roi_requires_input() {
    assert!(Cli::try_parse_from(["alliance", "roi"]).is_err());
}

#[test]
fn global_paths_accepted_after_subcommand() {
    let cli = Cli::try_parse_from([
        "alliance",
        "match",
        "--profile",
        "brand_1",
        "--profiles",
        "other.yaml",
        "--tuning",
        "tuning.yaml",
    ])
    .expect("expected valid cli args");
    assert_eq!(cli.profiles, Some(PathBuf::from("other.yaml")));
    assert_eq!(cli.tuning, Some(PathBuf::from("tuning.yaml")));
}

#[test]
fn kind_arg_converts_to_profile_kind() {
    assert_eq!(ProfileKind::from(KindArg::Brand), ProfileKind::Brand);
    assert_eq!(
        ProfileKind::from(KindArg::Organization),
        ProfileKind::Organization
    );
}

#[test]
fn help_resolves_during_parsing() {
    let err = Cli::try_parse_from(["alliance", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

    let err = Cli::try_parse_from(["alliance", "roi", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
