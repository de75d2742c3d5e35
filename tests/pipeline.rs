use std::fs;
use std::path::{Path, PathBuf};

use id3::frame::Comment;
use id3::{Tag, TagLike, Version};
use tempfile::TempDir;

use tagscrub::core::run;
use tagscrub::core::tags::read_tag_set;
use tagscrub::{ScrubOptions, TagVersion};

/// Fake audio payload: enough bytes for an ID3v1 trailer lookup to seek around in.
const AUDIO: [u8; 4096] = [0u8; 4096];

/// 128-byte ID3v1 trailer: "TAG" + title/artist/album (30 each) + year (4) + comment (30) + genre.
fn v1_trailer(title: &str, artist: &str) -> Vec<u8> {
    fn field(s: &str, len: usize) -> Vec<u8> {
        let mut b = s.as_bytes().to_vec();
        b.resize(len, 0);
        b
    }

    let mut out = b"TAG".to_vec();
    out.extend(field(title, 30));
    out.extend(field(artist, 30));
    out.extend(field("Some Album", 30));
    out.extend(field("2007", 4));
    out.extend(field("old comment", 30));
    out.push(12);
    assert_eq!(out.len(), 128);
    out
}

fn write_mp3(dir: &Path, name: &str, with_v1: bool) -> PathBuf {
    let path = dir.join(name);
    let mut bytes = AUDIO.to_vec();
    if with_v1 {
        bytes.extend(v1_trailer("old title", "old artist"));
    }
    fs::write(&path, bytes).unwrap();
    path
}

fn add_v2(path: &Path, comment: Option<&str>) {
    let mut tag = Tag::new();
    tag.set_artist("Wrong Artist");
    tag.set_title("wrong title");
    tag.set_album("Untrue");
    tag.set_album_artist("Various");
    tag.set_track(3);
    if let Some(text) = comment {
        tag.add_frame(Comment {
            lang: "eng".to_string(),
            description: String::new(),
            text: text.to_string(),
        });
    }
    tag.write_to_path(path, Version::Id3v24).unwrap();
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn renames_then_scrubs_tags() {
    let tmp = TempDir::new().unwrap();
    let original = write_mp3(tmp.path(), "Burial - Untrue - 03 near dark.mp3", true);
    add_v2(&original, Some("bandcamp.com"));

    let opts = ScrubOptions {
        rename_files: true,
        ..ScrubOptions::new(tmp.path())
    };
    let summary = run(&opts).unwrap();

    assert_eq!((summary.renamed, summary.scrubbed, summary.failed), (1, 1, 0));
    assert_eq!(file_names(tmp.path()), vec!["Burial - Near Dark.mp3"]);

    let (set, no_v2) = read_tag_set(&tmp.path().join("Burial - Near Dark.mp3"));
    assert!(!no_v2);
    assert_eq!(set.artist.as_deref(), Some("Burial"));
    assert_eq!(set.title.as_deref(), Some("Near Dark"));
    assert_eq!(set.band, None);
    assert_eq!(set.track, None);
    assert_eq!(set.comment, None);
    assert!(!set.has_v1);
    // v2 album is not one of the stale fields
    assert_eq!(set.album.as_deref(), Some("Untrue"));
}

#[test]
fn scrubs_file_without_any_tag() {
    let tmp = TempDir::new().unwrap();
    let path = write_mp3(tmp.path(), "Music For Sleep - The Edge.mp3", false);

    let summary = run(&ScrubOptions::new(tmp.path())).unwrap();

    assert_eq!(summary.scrubbed, 1);
    let (set, _) = read_tag_set(&path);
    assert_eq!(set.artist.as_deref(), Some("Music For Sleep"));
    assert_eq!(set.title.as_deref(), Some("The Edge"));
}

#[test]
fn corrects_key_comment() {
    let tmp = TempDir::new().unwrap();
    let keyed = write_mp3(tmp.path(), "A - Keyed.mp3", true);
    add_v2(&keyed, Some("8A/9A"));
    let unkeyed = write_mp3(tmp.path(), "B - Too Long.mp3", false);
    add_v2(&unkeyed, None);

    let opts = ScrubOptions {
        correct_key_comment: true,
        ..ScrubOptions::new(tmp.path())
    };
    run(&opts).unwrap();

    assert_eq!(read_tag_set(&keyed).0.comment.as_deref(), Some("8A 9A"));
    assert_eq!(read_tag_set(&unkeyed).0.comment.as_deref(), Some("N/A"));

    let tag = Tag::read_from_path(&keyed).unwrap();
    assert_eq!(tag.comments().count(), 1);
}

#[test]
fn comment_is_cleared_without_correction() {
    let tmp = TempDir::new().unwrap();
    let path = write_mp3(tmp.path(), "A - Keyed.mp3", false);
    add_v2(&path, Some("8A/9A"));

    run(&ScrubOptions::new(tmp.path())).unwrap();

    assert_eq!(Tag::read_from_path(&path).unwrap().comments().count(), 0);
}

#[test]
fn dry_run_touches_nothing() {
    let tmp = TempDir::new().unwrap();
    let path = write_mp3(tmp.path(), "X - Alb - 01 song.mp3", true);
    add_v2(&path, Some("8A/9A"));
    let before = fs::read(&path).unwrap();

    let opts = ScrubOptions {
        rename_files: true,
        correct_key_comment: true,
        dry_run: true,
        ..ScrubOptions::new(tmp.path())
    };
    let summary = run(&opts).unwrap();

    assert_eq!((summary.renamed, summary.scrubbed, summary.failed), (1, 1, 0));
    assert_eq!(file_names(tmp.path()), vec!["X - Alb - 01 song.mp3"]);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn dry_run_reports_collisions_like_a_real_run() {
    let collide = |dir: &Path| {
        write_mp3(dir, "X - One - 01 song.mp3", false);
        write_mp3(dir, "X - Two - 02 song.mp3", false);
        write_mp3(dir, "Y - Alb - 03 taken.mp3", false);
        write_mp3(dir, "Y - Taken.mp3", false);
    };

    let dry = TempDir::new().unwrap();
    collide(dry.path());
    let dry_summary = run(&ScrubOptions {
        rename_files: true,
        dry_run: true,
        ..ScrubOptions::new(dry.path())
    })
    .unwrap();

    let real = TempDir::new().unwrap();
    collide(real.path());
    let real_summary = run(&ScrubOptions {
        rename_files: true,
        ..ScrubOptions::new(real.path())
    })
    .unwrap();

    assert_eq!(
        (dry_summary.renamed, dry_summary.scrubbed, dry_summary.failed),
        (1, 4, 2)
    );
    assert_eq!(dry_summary, real_summary);
    assert!(real.path().join("X - Two - 02 song.mp3").exists());
    assert!(real.path().join("Y - Alb - 03 taken.mp3").exists());
}

#[test]
fn broken_v2_tag_leaves_file_untouched() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("A - B.mp3");
    // "ID3" header with an unknown major version, then audio and a v1 trailer
    let mut bytes = b"ID3\x09\x00\x00\x00\x00\x00\x10".to_vec();
    bytes.extend(AUDIO);
    bytes.extend(v1_trailer("old title", "old artist"));
    fs::write(&path, &bytes).unwrap();

    let summary = run(&ScrubOptions::new(tmp.path())).unwrap();

    assert_eq!((summary.scrubbed, summary.failed), (0, 1));
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn corrects_comment_that_only_has_a_description() {
    let tmp = TempDir::new().unwrap();
    let path = write_mp3(tmp.path(), "A - Keyed.mp3", false);
    let mut tag = Tag::new();
    tag.add_frame(Comment {
        lang: "eng".to_string(),
        description: "Key".to_string(),
        text: "2B/3B".to_string(),
    });
    tag.write_to_path(&path, Version::Id3v24).unwrap();

    run(&ScrubOptions {
        correct_key_comment: true,
        ..ScrubOptions::new(tmp.path())
    })
    .unwrap();

    let tag = Tag::read_from_path(&path).unwrap();
    let comments: Vec<_> = tag.comments().collect();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].text, "2B 3B");
    assert_eq!(comments[0].description, "");
}

#[test]
fn numbered_title_without_album_is_not_renamed() {
    let tmp = TempDir::new().unwrap();
    let path = write_mp3(tmp.path(), "Jay - 24 Hours.mp3", false);

    let summary = run(&ScrubOptions {
        rename_files: true,
        ..ScrubOptions::new(tmp.path())
    })
    .unwrap();

    assert_eq!((summary.renamed, summary.failed), (0, 0));
    assert_eq!(read_tag_set(&path).0.title.as_deref(), Some("24 Hours"));
}

#[test]
fn bad_names_are_counted_and_skipped() {
    let tmp = TempDir::new().unwrap();
    write_mp3(tmp.path(), "no delimiter here.mp3", false);
    let good = write_mp3(tmp.path(), "A - B.mp3", false);

    let summary = run(&ScrubOptions {
        rename_files: true,
        ..ScrubOptions::new(tmp.path())
    })
    .unwrap();

    // fails once when planning the rename, once when scrubbing
    assert_eq!((summary.renamed, summary.scrubbed, summary.failed), (0, 1, 2));
    assert_eq!(read_tag_set(&good).0.artist.as_deref(), Some("A"));
}

#[test]
fn writes_requested_id3_version() {
    let tmp = TempDir::new().unwrap();
    let path = write_mp3(tmp.path(), "A - B.mp3", false);

    run(&ScrubOptions {
        tag_version: TagVersion::V23,
        ..ScrubOptions::new(tmp.path())
    })
    .unwrap();

    assert_eq!(Tag::read_from_path(&path).unwrap().version(), Version::Id3v23);
}

#[test]
fn missing_directory_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");

    assert!(matches!(
        run(&ScrubOptions::new(&missing)),
        Err(tagscrub::Error::NotADirectory(_))
    ));
}
