use blox_core::{Color3, UDim2};
use blox_export::{
    ArtifactSink, ConversionRequest, DirectorySink, ExportOutput, ExportSession, Exporter,
    FileKind, RunMode,
};
use blox_instance::classes::{Frame, TextButton};
use blox_instance::props::GuiObjectProps;
use blox_instance::{Entity, Kind, Scene};

fn menu() -> (Scene, blox_core::EntityId) {
    let mut scene = Scene::new();
    let gui = scene.insert(Entity::of_kind(Kind::ScreenGui).with_name("Menu"));
    let panel = scene.insert(
        Entity::new(Frame {
            gui: GuiObjectProps {
                background_color3: Color3::rgb(30, 30, 46),
                ..GuiObjectProps::default().sized(UDim2::from_offset(320, 240))
            },
            ..Frame::default()
        })
        .with_name("Panel")
        .with_parent(gui),
    );
    scene.insert(Entity::of_kind(Kind::UICorner).with_name("Corner").with_parent(panel));
    scene.insert(Entity::new(TextButton::default()).with_name("Play").with_parent(panel));
    (scene, gui)
}

fn file(output: ExportOutput) -> blox_export::OutputFile {
    match output {
        ExportOutput::File(file) => file,
        other => panic!("expected a file, got {other:?}"),
    }
}

#[test]
fn single_frame_script() {
    let session = ExportSession::new();
    let mut scene = Scene::new();
    let frame = scene.insert(Entity::of_kind(Kind::Frame));

    let out = file(
        Exporter::new(&session)
            .export(&scene, &ConversionRequest::new(RunMode::Script, vec![frame]))
            .unwrap(),
    );
    assert_eq!(out.name, "blox_ui_lua");
    assert_eq!(out.file_name(), "blox_ui_lua.lua");

    let lines: Vec<&str> = out.content.lines().collect();
    assert_eq!(lines[0], "local frame = Instance.new(\"Frame\")");
    assert_eq!(lines[1], "frame.Name = \"Frame\"");
    assert_eq!(lines.last(), Some(&"frame.Style = Enum.FrameStyle.Custom"));
    let auto_localize = lines.iter().position(|l| l.starts_with("frame.AutoLocalize")).unwrap();
    let active = lines.iter().position(|l| l.starts_with("frame.Active")).unwrap();
    assert!(auto_localize < active);
}

#[test]
fn single_frame_markup() {
    let session = ExportSession::new();
    let mut scene = Scene::new();
    let frame = scene.insert(Entity::of_kind(Kind::Frame));

    let out = file(
        Exporter::new(&session)
            .export(&scene, &ConversionRequest::new(RunMode::Markup, vec![frame]))
            .unwrap(),
    );
    assert_eq!(out.name, "blox_ui_rbxmx");
    assert_eq!(out.kind, FileKind::Rbxmx);
    assert_eq!(out.content.matches("<Item class=\"Frame\">").count(), 1);
    assert_eq!(out.content.matches("<Item ").count(), 1);
    assert!(out.content.contains("<bool name=\"Draggable\">false</bool>"));
    assert!(out.content.contains("<token name=\"Style\">0</token>"));
    assert!(out.content.ends_with("\t</Item>\n</roblox>\n"));
}

#[test]
fn names_advance_per_kind() {
    let session = ExportSession::new();
    let exporter = Exporter::new(&session);
    let (scene, gui) = menu();

    let names: Vec<String> = [RunMode::Script, RunMode::Script, RunMode::Markup, RunMode::Script]
        .into_iter()
        .map(|mode| {
            file(exporter.export(&scene, &ConversionRequest::new(mode, vec![gui])).unwrap()).name
        })
        .collect();
    assert_eq!(
        names,
        ["blox_ui_lua", "blox_ui_lua_1", "blox_ui_rbxmx", "blox_ui_lua_2"]
    );
}

#[test]
fn nested_tree_in_both_formats() {
    let session = ExportSession::new();
    let exporter = Exporter::new(&session);
    let (scene, gui) = menu();

    let script = file(
        exporter
            .export(&scene, &ConversionRequest::new(RunMode::Script, vec![gui]))
            .unwrap(),
    );
    assert!(script.content.contains("panel.Parent = menu"));
    assert!(script.content.contains("corner.Parent = panel"));
    assert!(script.content.contains("play.Parent = panel"));
    assert!(script.content.contains("panel.Size = UDim2.new(0, 320, 0, 240)"));
    assert!(script.content.contains("panel.BackgroundColor3 = Color3.fromRGB(30, 30, 46)"));

    let model = file(
        exporter
            .export(&scene, &ConversionRequest::new(RunMode::Markup, vec![gui]))
            .unwrap(),
    );
    assert!(model.content.contains("\t<Item class=\"ScreenGui\">"));
    assert!(model.content.contains("\t\t<Item class=\"Frame\">"));
    assert!(model.content.contains("\t\t\t<Item class=\"UICorner\">"));
    assert!(model.content.contains("\t\t\t<Item class=\"TextButton\">"));
}

#[test]
fn export_then_persist() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());
    let session = ExportSession::new();
    let (scene, gui) = menu();

    for mode in [RunMode::Script, RunMode::Markup] {
        let out = file(
            Exporter::new(&session)
                .export(&scene, &ConversionRequest::new(mode, vec![gui]))
                .unwrap(),
        );
        sink.persist(&out).unwrap();
    }

    let script = std::fs::read_to_string(dir.path().join("blox_ui_lua.lua")).unwrap();
    assert!(script.starts_with("local menu = Instance.new(\"ScreenGui\")"));
    let model = std::fs::read_to_string(dir.path().join("blox_ui_rbxmx.rbxmx")).unwrap();
    assert!(model.starts_with("<roblox "));
}

#[test]
fn corner_documents() {
    let session = ExportSession::new();
    let exporter = Exporter::new(&session);
    let mut scene = Scene::new();
    let corner = scene.insert(Entity::of_kind(Kind::UICorner).with_name("Corner"));

    let script = file(
        exporter
            .export(&scene, &ConversionRequest::new(RunMode::Script, vec![corner]))
            .unwrap(),
    );
    insta::assert_snapshot!(script.content, @r###"
    local corner = Instance.new("UICorner")
    corner.Name = "Corner"
    corner.Archivable = true
    corner.CornerRadius = UDim.new(0, 8)
    "###);

    let model = file(
        exporter
            .export(&scene, &ConversionRequest::new(RunMode::Markup, vec![corner]))
            .unwrap(),
    );
    let expected = concat!(
        "<roblox xmlns:xmime=\"http://www.w3.org/2005/05/xmlmime\" ",
        "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" ",
        "xsi:noNamespaceSchemaLocation=\"http://www.roblox.com/roblox.xsd\" version=\"4\">\n",
        "\t<Meta name=\"ExplicitAutoJoints\">true</Meta>\n",
        "\t<External>null</External>\n",
        "\t<External>nil</External>\n",
        "\t<Item class=\"UICorner\">\n",
        "\t\t<Properties>\n",
        "\t\t\t<string name=\"Name\">Corner</string>\n",
        "\t\t\t<UDim name=\"CornerRadius\"><S>0</S><O>8</O></UDim>\n",
        "\t\t</Properties>\n",
        "\t</Item>\n",
        "</roblox>\n",
    );
    assert_eq!(model.content, expected);
}
