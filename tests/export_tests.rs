#[cfg(test)]
mod export_tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use registry_export::config::ExportConfig;
    use registry_export::error::ExportError;
    use registry_export::export::run_with_console;

    const COW_AND_PIG: &str = r#"{
        "minecraft:entity_type": {
            "default": "minecraft:pig",
            "protocol_id": 6,
            "entries": {
                "minecraft:cow": { "protocol_id": 5 },
                "minecraft:pig": { "protocol_id": 7 }
            }
        }
    }"#;

    /// Config reading `document` from `dir`, writing into `out_dir`
    fn setup(dir: &Path, out_dir: &str, document: &str) -> ExportConfig {
        let input = dir.join("registries.json");
        fs::write(&input, document).unwrap();

        let out = dir.join(out_dir);
        ExportConfig {
            input: input.to_string_lossy().into_owned(),
            code_output: out
                .join("entity_types_code-1.{version}.txt")
                .to_string_lossy()
                .into_owned(),
            index_output: out
                .join("entity_types-1.{version}.json")
                .to_string_lossy()
                .into_owned(),
            quiet: true,
            ..ExportConfig::default()
        }
    }

    fn outputs(config: &ExportConfig) -> (PathBuf, PathBuf) {
        let paths = config.resolve();
        (paths.code_output, paths.index_output)
    }

    #[test]
    fn test_cow_and_pig() {
        let dir = tempfile::tempdir().unwrap();
        let config = setup(dir.path(), "out", COW_AND_PIG);

        let summary = run_with_console(&config, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(summary.entries, 2);

        let (code_path, index_path) = outputs(&config);
        let code = fs::read_to_string(code_path).unwrap();
        let lines: Vec<&str> = code.lines().collect();
        assert_eq!(
            lines,
            vec![
                "public static readonly ResourceLocation COW_ID = new(\"cow\");",
                "public static readonly ResourceLocation PIG_ID = new(\"pig\");",
            ]
        );
        assert!(code.ends_with('\n'));

        let index: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(index_path).unwrap()).unwrap();
        assert_eq!(index, serde_json::json!({"5": "cow", "7": "pig"}));
    }

    #[test]
    fn test_index_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let config = setup(dir.path(), "out", COW_AND_PIG);
        run_with_console(&config, &mut Vec::<u8>::new()).unwrap();

        let (_, index_path) = outputs(&config);
        assert_eq!(
            fs::read_to_string(index_path).unwrap(),
            "{\n    \"5\": \"cow\",\n    \"7\": \"pig\"\n}"
        );
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = setup(dir.path(), "first", COW_AND_PIG);
        let second = setup(dir.path(), "second", COW_AND_PIG);

        run_with_console(&first, &mut Vec::<u8>::new()).unwrap();
        run_with_console(&second, &mut Vec::<u8>::new()).unwrap();

        let (code_a, index_a) = outputs(&first);
        let (code_b, index_b) = outputs(&second);
        assert_ne!(code_a, code_b);
        assert_eq!(fs::read(code_a).unwrap(), fs::read(code_b).unwrap());
        assert_eq!(fs::read(index_a).unwrap(), fs::read(index_b).unwrap());
    }

    #[test]
    fn test_duplicate_protocol_id_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let config = setup(
            dir.path(),
            "out",
            r#"{"minecraft:entity_type": {"entries": {
                "minecraft:cow": {"protocol_id": 5},
                "minecraft:mooshroom": {"protocol_id": 5}
            }}}"#,
        );

        let summary = run_with_console(&config, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(summary.entries, 2);
        assert_eq!(summary.indexed, 1);
        assert_eq!(summary.duplicates, 1);

        let (code_path, index_path) = outputs(&config);
        let code = fs::read_to_string(code_path).unwrap();
        assert_eq!(code.lines().count(), 2);
        assert!(code.contains("COW_ID"));
        assert!(code.contains("MOOSHROOM_ID"));

        let index: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(index_path).unwrap()).unwrap();
        assert_eq!(index, serde_json::json!({"5": "mooshroom"}));
    }

    #[test]
    fn test_strict_rejects_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = setup(
            dir.path(),
            "out",
            r#"{"minecraft:entity_type": {"entries": {
                "minecraft:cow": {"protocol_id": 5},
                "minecraft:mooshroom": {"protocol_id": 5}
            }}}"#,
        );
        config.strict = true;

        let err = run_with_console(&config, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, ExportError::DuplicateProtocolId { protocol_id: 5, .. }));
    }

    #[test]
    fn test_missing_separator_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = setup(
            dir.path(),
            "out",
            r#"{"minecraft:entity_type": {"entries": {
                "minecraft:cow": {"protocol_id": 5},
                "pig": {"protocol_id": 7}
            }}}"#,
        );

        let err = run_with_console(&config, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, ExportError::MissingSeparator { ref key } if key == "pig"));

        let (code_path, index_path) = outputs(&config);
        assert!(!code_path.exists());
        assert!(!index_path.exists());
    }

    #[test]
    fn test_failed_run_keeps_previous_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = setup(dir.path(), "out", COW_AND_PIG);
        run_with_console(&config, &mut Vec::<u8>::new()).unwrap();

        let (code_path, _) = outputs(&config);
        let before = fs::read_to_string(&code_path).unwrap();

        fs::write(dir.path().join("registries.json"), "{ truncated").unwrap();
        let err = run_with_console(&config, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, ExportError::Parse { .. }));
        assert_eq!(fs::read_to_string(&code_path).unwrap(), before);
    }

    #[test]
    fn test_empty_entries() {
        let dir = tempfile::tempdir().unwrap();
        let config = setup(dir.path(), "out", r#"{"minecraft:entity_type": {"entries": {}}}"#);

        let summary = run_with_console(&config, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(summary.entries, 0);

        let (code_path, index_path) = outputs(&config);
        assert_eq!(fs::read_to_string(code_path).unwrap(), "");
        assert_eq!(fs::read_to_string(index_path).unwrap(), "{}");
    }

    #[test]
    fn test_missing_input_and_registry() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = setup(dir.path(), "out", r#"{"minecraft:item": {"entries": {}}}"#);

        let err = run_with_console(&config, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, ExportError::MissingRegistry { .. }));
        assert!(err.to_string().contains("minecraft:item"));

        config.input = dir.path().join("absent.json").to_string_lossy().into_owned();
        let err = run_with_console(&config, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, ExportError::Read { .. }));
    }

    #[test]
    fn test_other_registry() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = setup(
            dir.path(),
            "out",
            r#"{"minecraft:item": {"entries": {"minecraft:stone": {"protocol_id": 1}}}}"#,
        );
        config.registry = "minecraft:item".to_string();
        config.version = "19".to_string();

        run_with_console(&config, &mut Vec::<u8>::new()).unwrap();

        let code = fs::read_to_string(dir.path().join("out/entity_types_code-1.19.txt")).unwrap();
        assert_eq!(code, "public static readonly ResourceLocation STONE_ID = new(\"stone\");\n");
    }
}
