use pretty_assertions::assert_eq;

use toyasm_rs::{assemble, AsmConfig, AsmError, Assembler, EncodeError, OperandFault};

const SCRIPT: &str = "
LOOP: ADD R1, R2  # A comment
MOV R3, R4
JUMP:  # Just a label
# This is a comment
";

#[test]
fn labels_comments_and_blank_lines() {
    let out = assemble(SCRIPT).unwrap();
    assert_eq!(out, "000000000100010\n001100001100100");
}

#[test]
fn registers_and_immediates() {
    let src = "
START:  MOV R1, 1     # Load 1 into R1
        CMP R1, R2    # Compare R1 and R2
EQUAL:  MOV R0, 1
END:    RET
";
    let out = assemble(src).unwrap();
    assert_eq!(
        out,
        "001100000100001\n\
         010100000100010\n\
         001100000000001\n\
         10110"
    );
}

#[test]
fn width_is_five_plus_five_per_operand() {
    let src = "RET\nNOT R1\nADD R1, R2\nST R1, R2, 3\nPUSH 1, 2, 3, 4, 5, 6, 7";
    let out = assemble(src).unwrap();
    let widths: Vec<usize> = out.lines().map(str::len).collect();
    assert_eq!(widths, vec![5, 10, 15, 20, 40]);
}

#[test]
fn empty_and_label_only_sources_emit_nothing() {
    assert_eq!(assemble("").unwrap(), "");
    assert_eq!(assemble("\n\n   \n# nothing here\n").unwrap(), "");
    assert_eq!(assemble("A:\nB:   # still nothing\n").unwrap(), "");
}

#[test]
fn unknown_mnemonic_aborts_with_line() {
    let err = assemble("ADD R1, R2\n  FOO R1  # bad\nMOV R3, R4").unwrap_err();
    assert_eq!(
        err,
        AsmError::Line {
            line: 2,
            content: "FOO R1  # bad".into(),
            source: EncodeError::UnknownMnemonic { mnemonic: "FOO".into() },
        }
    );
    assert_eq!(err.to_string(), "line 2: unknown mnemonic `FOO` in `FOO R1  # bad`");
}

#[test]
fn out_of_range_register_is_rejected() {
    let err = assemble("MOV R32, R1").unwrap_err();
    assert_eq!(
        err.encode_error(),
        Some(&EncodeError::InvalidOperand {
            operand: "R32".into(),
            fault: OperandFault::OutOfRange { digits: "32".into() },
        })
    );
}

#[test]
fn label_references_are_not_resolved() {
    let err = assemble("LOOP: ADD R1, R2\nJMP LOOP").unwrap_err();
    assert!(matches!(
        err.encode_error(),
        Some(EncodeError::InvalidOperand { fault: OperandFault::NotANumber, .. })
    ));
}

#[test]
fn lowercase_mnemonic_is_unknown() {
    assert!(matches!(
        assemble("add R1, R2").unwrap_err().encode_error(),
        Some(EncodeError::UnknownMnemonic { .. })
    ));
}

#[test]
fn crlf_sources() {
    assert_eq!(assemble("ADD R1, R2\r\nRET\r\n").unwrap(), "000000000100010\n10110");
}

#[test]
fn config_controls_empty_input_and_newline() {
    let strict = Assembler::new(AsmConfig { reject_empty: true, trailing_newline: false });
    assert_eq!(strict.assemble("  \n ").unwrap_err(), AsmError::EmptyInput);
    // comment-only source is not empty text
    assert_eq!(strict.assemble("# hi").unwrap(), "");

    let nl = Assembler::new(AsmConfig { reject_empty: false, trailing_newline: true });
    assert_eq!(nl.assemble("RET\nRET").unwrap(), "10110\n10110\n");
    assert_eq!(nl.assemble("").unwrap(), "");
}

#[test]
fn listing_reports_labels_and_code() {
    let entries = Assembler::default().listing(SCRIPT).unwrap();
    let summary: Vec<(usize, Option<&str>, Option<&str>)> = entries
        .iter()
        .map(|e| (e.line, e.label.as_deref(), e.code.as_deref()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (2, Some("LOOP"), Some("000000000100010")),
            (3, None, Some("001100001100100")),
            (4, Some("JUMP"), None),
        ]
    );
    assert_eq!(entries[0].source, "LOOP: ADD R1, R2  # A comment");
}

#[test]
fn listing_code_matches_assemble_output() {
    let src = "A: PUSH R1\nB:\nPOP R2\nC: BL 3";
    let asm = Assembler::default();
    let from_listing: Vec<String> = asm.listing(src).unwrap().into_iter().filter_map(|e| e.code).collect();
    assert_eq!(from_listing.join("\n"), asm.assemble(src).unwrap());
}

#[test]
fn listing_serializes_to_json() {
    let entries = Assembler::default().listing("X: RET").unwrap();
    let json = serde_json::to_value(&entries).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "line": 1, "label": "X", "source": "X: RET", "code": "10110" }])
    );
}

#[test]
fn assemble_is_reentrant_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || assemble(&format!("MOV R{i}, {i}")).unwrap()))
        .collect();
    let outs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outs[3], "001100001100011");
    assert_eq!(outs[0], "001100000000000");
}
