//! Project model and editor sessions working together

use crate::common;

use contract_wizard::analysis::CONTRACT_MARKER;
use contract_wizard::{
    language_for, Compiler, EditorSession, Error, GenerationRequest, LensAction, ProjectModel,
    Result,
};
use std::cell::Cell;

struct CountingCompiler {
    calls: Cell<usize>,
}

impl Compiler for CountingCompiler {
    fn compile(&self, source: &str) -> Result<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        if source.contains(CONTRACT_MARKER) {
            Ok(vec![0x00, 0x61, 0x73, 0x6d])
        } else {
            Err(Error::Compilation("no contract in source".to_string()))
        }
    }
}

#[test]
fn test_multi_file_demo() {
    let mut model = ProjectModel::default();
    model.initialize_multi_file();

    let lib_id = model.find_file("lib.rs").unwrap();
    let content = model.get_file_content(lib_id).unwrap();
    assert!(!content.is_empty());
    assert!(content.contains(CONTRACT_MARKER));

    let before = model.file_count();
    model.update_file_content(999, "x");
    assert_eq!(model.file_count(), before);
}

#[test]
fn test_generated_code_flows_into_editor() {
    let facade = common::facade();
    let request = GenerationRequest::new("Voting", "MyVote").with_author("eigerco");
    let code = facade.get_code(&request).code();

    let mut model = ProjectModel::new("my-vote");
    model.initialize_single_file();
    let lib_id = model.file_ids()[0];
    assert_eq!(
        language_for(model.get_file_name(lib_id).unwrap()).as_deref(),
        Some("rust")
    );

    let mut session = EditorSession::new(lib_id, "MyVote");
    let editor_lenses = session
        .on_change(&mut model, &code, &mut common::numbered_commands())
        .clone();
    let facade_lenses = facade.get_invokes(&request, &mut common::numbered_commands());

    // the editor sees the same anchors the facade predicted
    assert_eq!(common::anchors(&editor_lenses), common::anchors(&facade_lenses));
    assert_eq!(model.get_file_content(lib_id), Some(code.as_str()));
}

#[test]
fn test_each_change_rebuilds_from_scratch() {
    let mut model = ProjectModel::default();
    model.initialize_single_file();
    let mut session = EditorSession::new(1, "IncrementContract");

    let mounted = session.mount(&model, &mut common::numbered_commands()).len();
    assert_eq!(mounted, 3);

    session.on_change(&mut model, "// emptied", &mut |_: &LensAction| String::new());
    assert!(session.lenses().is_empty());

    let restored = session
        .on_change(
            &mut model,
            "#[contract]\npub struct IncrementContract;\n",
            &mut common::numbered_commands(),
        )
        .len();
    assert_eq!(restored, 1);
    assert_eq!(session.lenses().lenses[0].command_id, "cmd-1");
}

#[test]
fn test_late_fetch_does_not_clobber_edits() {
    let mut model = ProjectModel::default();
    model.initialize_multi_file();
    let lib_id = model.find_file("lib.rs").unwrap();

    // a fetch is started against the current revision
    let requested_at = model.revision(lib_id).unwrap();

    // the user types before it comes back
    model.update_file_content(lib_id, "user text");

    assert!(!model.update_if_current(lib_id, requested_at, "fetched text"));
    assert_eq!(model.get_file_content(lib_id), Some("user text"));
}

#[test]
fn test_compile_submission() {
    let compiler = CountingCompiler { calls: Cell::new(0) };
    let mut model = ProjectModel::default();
    model.initialize_multi_file();
    let lib_id = model.find_file("lib.rs").unwrap();
    let manifest_id = model.find_file("Cargo.toml").unwrap();

    assert!(model.compile_with(lib_id, &compiler).unwrap());
    assert_eq!(model.wasm(), Some(&[0x00, 0x61, 0x73, 0x6d][..]));

    assert!(model.compile_with(manifest_id, &compiler).is_err());
    // directories have no content to submit
    assert!(!model.compile_with(1, &compiler).unwrap());
    assert_eq!(compiler.calls.get(), 2);
}

#[test]
fn test_tree_json_for_display() {
    let mut model = ProjectModel::new("demo");
    model.initialize_multi_file();

    let json = serde_json::to_value(model.get_tree()).unwrap();
    assert_eq!(json["name"], "demo");
    assert_eq!(json["children"][0]["name"], "src");
    assert_eq!(json["children"][0]["children"][0]["name"], "lib.rs");
    assert_eq!(json["children"][1]["name"], "Cargo.toml");
}
