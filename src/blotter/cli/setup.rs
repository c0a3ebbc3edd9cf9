use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blotter", bin_name = "blotter", version)]
#[command(about = "Interactive single-user blog manager", long_about = None)]
pub struct Cli {
    /// JSON file holding every post (default: blog.json)
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Where "Export to HTML" writes (default: blog.html)
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Directory to read blotter.json from (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_uses_defaults() {
        let cli = Cli::try_parse_from(["blotter"]).unwrap();
        assert!(cli.store.is_none());
        assert!(cli.export.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_paths_and_verbose() {
        let cli = Cli::try_parse_from([
            "blotter", "--store", "data/b.json", "--export", "out.html", "-v",
        ])
        .unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("data/b.json")));
        assert_eq!(cli.export, Some(PathBuf::from("out.html")));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_positional_args() {
        assert!(Cli::try_parse_from(["blotter", "list"]).is_err());
    }
}
