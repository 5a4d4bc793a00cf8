//! Additional tests for CLI module to improve coverage

use chatlens::cli::{Args, ReportFormat};
use chatlens::filter::Filter;
use chatlens::format::OutputFormat;
use clap::{CommandFactory, Parser};

#[test]
fn test_command_definition_is_valid() {
    Args::command().debug_assert();
}

#[test]
fn test_report_format_variants() {
    let text = Args::try_parse_from(["chatlens", "chat.txt", "--format", "text"]).unwrap();
    assert_eq!(text.format, ReportFormat::Text);

    let alias = Args::try_parse_from(["chatlens", "chat.txt", "--format", "txt"]).unwrap();
    assert_eq!(alias.format, ReportFormat::Text);

    let json = Args::try_parse_from(["chatlens", "chat.txt", "-f", "json"]).unwrap();
    assert_eq!(json.format, ReportFormat::Json);
}

#[test]
fn test_report_format_errors() {
    assert!(Args::try_parse_from(["chatlens", "chat.txt", "-f", "csv"]).is_err());
    assert!(Args::try_parse_from(["chatlens", "chat.txt", "-f", ""]).is_err());
}

#[test]
fn test_report_format_into_library_format() {
    assert_eq!(OutputFormat::from(ReportFormat::Text), OutputFormat::Text);
    assert_eq!(OutputFormat::from(ReportFormat::Json), OutputFormat::Json);
}

#[test]
fn test_user_flag_builds_filter() {
    let overall = Args::try_parse_from(["chatlens", "chat.txt"]).unwrap();
    assert_eq!(overall.filter(), Filter::Overall);

    let explicit = Args::try_parse_from(["chatlens", "chat.txt", "--user", "Overall"]).unwrap();
    assert_eq!(explicit.filter(), Filter::Overall);

    let named = Args::try_parse_from(["chatlens", "chat.txt", "--user", "Иван Петров"]).unwrap();
    assert_eq!(named.filter(), Filter::participant("Иван Петров"));
}

#[test]
fn test_top_must_be_a_number() {
    assert!(Args::try_parse_from(["chatlens", "chat.txt", "--top", "many"]).is_err());
    assert!(Args::try_parse_from(["chatlens", "chat.txt", "--top", "-1"]).is_err());
}

#[test]
fn test_log_level_is_optional() {
    let args = Args::try_parse_from(["chatlens", "chat.txt"]).unwrap();
    assert!(args.log_level.is_none());
}
