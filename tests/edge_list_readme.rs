// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The README's edge-list example must stay valid.

use std::fs;
use std::path::Path;

use triton::parse::parse_edge_list;

fn readme_edge_list_block() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("README.md");
    let readme =
        fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"));

    let (_, after_fence) = readme
        .split_once("```text\n")
        .expect("README should contain a ```text edge-list block");
    let (block, _) = after_fence
        .split_once("```")
        .expect("edge-list block should be fenced");
    block.to_owned()
}

#[test]
fn readme_edge_list_example_parses() {
    let segments = parse_edge_list(&readme_edge_list_block())
        .unwrap_or_else(|err| panic!("README edge list should parse: {err}"));

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].color(), "red");
    assert_eq!(segments[1].color(), "#ff8800");
    assert!(segments.iter().all(|s| s.start().in_bounds() && s.end().in_bounds()));
}
