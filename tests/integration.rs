use folder_store::shell::run_session;
use folder_store::storage::{File, Folder, FolderRegistry, Icon, move_between, share};
use folder_store::StorageError;

// Helper to build a folder holding the given file stems
fn folder_with(name: &str, stems: &[&str]) -> Folder {
    let mut folder = Folder::new(name).unwrap();
    for stem in stems {
        let mut file = File::new(stem, *stem, None).unwrap();
        assert!(folder.add_file(&mut file));
    }
    folder
}

// Helper to drive a shell session from a script and collect its output
async fn run_script(registry: &mut FolderRegistry, script: &str) -> String {
    let mut output = Vec::new();
    run_session(registry, "", script.as_bytes(), &mut output)
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_remove_and_display_scenario() {
    let mut my_folder = folder_with("myFolder", &["a", "b", "c", "d", "e", "f"]);

    assert!(my_folder.remove_file("d.txt"));
    assert!(!my_folder.remove_file("d.txt"));
    assert!(!my_folder.remove_file("a"));

    let listing = my_folder.display();
    let names: Vec<&str> = listing.lines().skip(1).map(str::trim).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt", "e.txt", "f.txt"]);
}

#[test]
fn test_default_folder_rename_rejected() {
    let mut folder = Folder::new("").unwrap();
    assert_eq!(folder.name(), "NewFolder");
    assert!(!folder.rename("bad name!"));
    assert_eq!(folder.name(), "NewFolder");
}

#[test]
fn test_invalid_names_fail_construction() {
    for candidate in ["bad.name.here", "!badnamehere", "b$ad.namehere"] {
        match File::new(candidate, "", None) {
            Err(StorageError::InvalidFormat(rejected)) => assert_eq!(rejected, candidate),
            other => panic!("expected InvalidFormat for {}, got {:?}", candidate, other),
        }
    }
    assert!(Folder::new("no-dashes").is_err());
}

#[test]
fn test_copy_then_move_keeps_icons_independent() {
    let mut source = Folder::new("Source").unwrap();
    let mut destination = Folder::new("Dest").unwrap();
    let mut archive = Folder::new("Archive").unwrap();

    let mut file = File::new("logo.bmp", "", Some(Icon::filled(1))).unwrap();
    assert!(source.add_file(&mut file));

    assert!(source.copy_file_to("logo.bmp", &mut destination));
    assert!(destination.move_file_to("logo.bmp", &mut archive));
    assert!(destination.is_empty());

    archive
        .get_file_mut("logo.bmp")
        .unwrap()
        .icon_mut()
        .unwrap()
        .pixels_mut()[0] = 2;

    assert_eq!(
        source.get_file("logo.bmp").unwrap().icon().unwrap().pixels()[0],
        1
    );
    assert_eq!(
        archive.get_file("logo.bmp").unwrap().icon().unwrap().pixels()[0],
        2
    );
}

#[tokio::test]
async fn test_shared_round_trip() {
    let a = share(folder_with("A", &["x", "y"]));
    let b = share(folder_with("B", &["z"]));
    let (a_before, b_before) = (a.lock().await.clone(), b.lock().await.clone());

    assert!(move_between(&a, "x.txt", &b).await);
    assert!(move_between(&b, "x.txt", &a).await);

    assert_eq!(*a.lock().await, a_before);
    assert_eq!(*b.lock().await, b_before);
}

#[tokio::test]
async fn test_shell_session_script() {
    let mut registry = FolderRegistry::new(8);
    let output = run_script(
        &mut registry,
        "MKDIR Docs\n\
         MKDIR Backup\n\
         TOUCH Docs report quarterly numbers\n\
         TOUCH Docs memo\n\
         CP Docs report.txt Backup\n\
         MV Docs memo.txt Backup\n\
         MV Docs memo.txt Backup\n\
         LS Backup\n\
         DU Docs\n\
         RENAME Backup bad!name\n\
         RM Docs report.txt\n\
         LS Docs\n\
         QUIT\n",
    )
    .await;

    let expected = [
        "Created folder Docs",
        "Created folder Backup",
        "Added report.txt to Docs",
        "Added memo.txt to Docs",
        "Copied report.txt from Docs to Backup",
        "Moved memo.txt from Docs to Backup",
        "Cannot move memo.txt from Docs to Backup",
        "Backup",
        "   memo.txt",
        "   report.txt",
        "17 bytes",
        "Cannot rename Backup: invalid name bad!name",
        "Removed report.txt from Docs",
        "Docs",
        "Goodbye",
    ];
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
    assert_eq!(registry.names(), vec!["Backup", "Docs"]);
}
