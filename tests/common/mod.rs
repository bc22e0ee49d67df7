use std::fs;
use std::path::{Path, PathBuf};

use gfmul::trace::render_evaluation;
use gfmul::{Evaluation, RenderOptions};

const UPDATE_VAR: &str = "GFMUL_UPDATE_SNAPSHOTS";

/// Report sections in rendering order, separated by a blank line.
const SECTIONS: [&str; 5] = ["reduce a", "reduce b", "after reduction", "multiply", "summary"];

fn report_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
        .join(name)
}

fn sections(report: &str) -> Vec<String> {
    report
        .replace("\r\n", "\n")
        .trim_end()
        .split("\n\n")
        .map(str::to_string)
        .collect()
}

/// First report section where `expected` and `actual` disagree, with both texts.
pub fn first_divergence(expected: &str, actual: &str) -> Option<(&'static str, String, String)> {
    let (expected, actual) = (sections(expected), sections(actual));
    let count = expected.len().max(actual.len());
    (0..count).find_map(|index| {
        let (want, got) = (expected.get(index), actual.get(index));
        (want != got).then(|| {
            (
                SECTIONS.get(index).copied().unwrap_or("trailing"),
                want.cloned().unwrap_or_else(|| "<missing>".into()),
                got.cloned().unwrap_or_else(|| "<missing>".into()),
            )
        })
    })
}

/// Render `evaluation` and compare it with the stored report `name`.
pub fn assert_report_snapshot(name: &str, evaluation: &Evaluation, options: &RenderOptions) {
    let report = render_evaluation(evaluation, options);
    let path = report_path(name);
    if std::env::var_os(UPDATE_VAR).is_some() {
        fs::write(&path, format!("{report}\n")).expect("write report snapshot");
        return;
    }

    let stored = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("report snapshot {} not found", path.display()));
    if let Some((section, want, got)) = first_divergence(&stored, &report) {
        panic!(
            "{name} ({}) differs in the {section} section; set {UPDATE_VAR}=1 to regenerate\nexpected:\n{want}\nactual:\n{got}",
            evaluation.summary(),
        );
    }
}
