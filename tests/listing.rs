use std::path::Path;

use dirtable::{Controller, Settings};
use filetime::FileTime;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn touch(dir: &Path, name: &str, content: &str, mtime: i64) {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    filetime::set_file_mtime(&path, FileTime::from_unix_time(mtime, 0)).unwrap();
}

fn settings(userfiles: &Path, plugin_folder: &Path, extra: &str) -> Settings {
    let toml = format!(
        "{}\n[paths]\nuserfiles = {:?}\nplugin_folder = {:?}\n",
        extra,
        userfiles.to_string_lossy(),
        plugin_folder.to_string_lossy()
    );
    Settings::from_toml_str(&toml).unwrap()
}

fn row_names(table: &str) -> Vec<String> {
    table
        .split(r#"<td class="dirtable_name" data-dirtable=""#)
        .skip(1)
        .map(|rest| rest.split('"').next().unwrap().to_string())
        .collect()
}

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let files = dir.path().join("files");
    std::fs::create_dir(&files).unwrap();
    touch(&files, "foo.txt", "***", 345678);
    touch(&files, "bar.txt", "**", 234567);
    touch(&files, "baz.txt", "*", 123456);
    touch(&files, "foo.bar", "", 0);
    std::fs::create_dir(files.join("archive.txt")).unwrap();
    std::fs::create_dir_all(dir.path().join("plugin/images")).unwrap();
    std::fs::write(dir.path().join("plugin/images/file-txt.png"), "").unwrap();
    dir
}

fn render(dir: &Path, extra: &str, filter: Option<&str>) -> String {
    let settings = settings(&dir.join("files"), &dir.join("plugin"), extra);
    Controller::new(settings)
        .render_table("", filter)
        .unwrap()
        .table
}

#[test]
fn sorts_by_each_column() {
    init_logging();
    let dir = fixture();
    let cases = [
        ("sort_column = \"name\"", ["bar.txt", "baz.txt", "foo.txt"]),
        ("sort_column = \"size\"", ["baz.txt", "bar.txt", "foo.txt"]),
        ("sort_column = \"date\"", ["baz.txt", "bar.txt", "foo.txt"]),
        (
            "sort_column = \"name\"\nsort_ascending = false",
            ["foo.txt", "baz.txt", "bar.txt"],
        ),
    ];
    for (listing, expected) in cases {
        let table = render(dir.path(), &format!("[listing]\n{}", listing), Some("*.txt"));
        assert_eq!(row_names(&table), expected, "{}", listing);
    }
}

#[test]
fn regexp_filter_ignores_extension() {
    init_logging();
    let dir = fixture();
    let table = render(dir.path(), "[listing]\nfilter_regexp = true", Some("/^foo/"));
    assert_eq!(row_names(&table), ["foo.bar", "foo.txt"]);
}

#[test]
fn rows_carry_raw_values() {
    init_logging();
    let dir = fixture();
    let table = render(dir.path(), "", Some("foo.*"));

    assert!(table.contains(r#"<td class="dirtable_size" data-dirtable="3">1 KB</td>"#));
    assert!(table.contains(r#"<td class="dirtable_size" data-dirtable="0">0 KB</td>"#));
    assert!(table.contains(r#"<td class="dirtable_modified" data-dirtable="345678">"#));
    assert!(table.contains(r#"images/file-txt.png" alt="TXT file" title="TXT file">"#));
    assert!(table.contains(r#"images/file.png" alt="File" title="File">"#));
}

#[test]
fn missing_folder_renders_empty_table() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(&dir.path().join("nowhere"), dir.path(), "");
    let rendering = Controller::new(settings).render_table("deeper", None).unwrap();
    assert!(rendering.table.ends_with("<tbody></tbody></table>"));
    assert!(rendering.scripts.is_some());
}
