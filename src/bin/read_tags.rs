//! Print the tag fields tagscrub touches, for checking a file before/after a run.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tagscrub::TagSet;
use tagscrub::core::tags::read_tag_set;

#[derive(Parser, Debug)]
#[command(name = "read_tags", version)]
#[command(about = "Show the ID3 fields of one or more MP3 files")]
struct Args {
    /// MP3 files to inspect.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn print_field<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("  {label:<8} {v}"),
        None => println!("  {label:<8} -"),
    }
}

fn print_set(set: &TagSet) {
    print_field("artist", &set.artist);
    print_field("title", &set.title);
    print_field("album", &set.album);
    print_field("year", &set.year);
    print_field("comment", &set.comment);
    print_field("track", &set.track);
    print_field("genre", &set.genre);
    print_field("band", &set.band);
    println!("  {:<8} {}", "id3v1", if set.has_v1 { "present" } else { "none" });
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut missing = 0;

    for path in &args.files {
        if !path.is_file() {
            eprintln!("{}: not a file", path.display());
            missing += 1;
            continue;
        }

        let (set, no_v2) = read_tag_set(path);
        println!("{}", path.display());
        if no_v2 {
            println!("  (no ID3v2 tag)");
        }
        print_set(&set);
    }

    if missing == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
