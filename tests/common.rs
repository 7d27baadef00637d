#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::{Connection, params};
use servdash::config::Config;
use servdash::core::Dashboard;
use servdash::db::Backend;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn servdash() -> Command {
    cargo_bin_cmd!("servdash")
}

/// `servdash` isolated from the developer's machine: HOME and the working
/// directory point to an empty temp dir and no DB_* variable leaks in.
pub fn servdash_isolated(name: &str) -> Command {
    let home = temp_dir(name);
    let mut cmd = servdash();
    cmd.env("HOME", &home).current_dir(&home);
    for key in ["DB_HOST", "DB_PORT", "DB_NAME", "DB_USER", "DB_PASS", "RUST_LOG"] {
        cmd.env_remove(key);
    }
    cmd
}

/// Fresh, empty directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("servdash_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Temporary output file path inside tempdir; any previous file is removed.
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("servdash_{name}_out.{ext}"));
    fs::remove_file(&path).ok();
    path
}

pub fn dashboard(snapshot: &PathBuf) -> Dashboard {
    Dashboard::from_config(&Config::default(), Backend::Sqlite(snapshot.clone()))
}

/// Build a snapshot with the four tables the views read and a small week of
/// activity (2024-01-01..2024-01-07) plus rows just outside it.
pub fn seed_snapshot(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("servdash_{name}.sqlite"));
    fs::remove_file(&path).ok();

    let conn = Connection::open(&path).expect("open snapshot");
    conn.execute_batch(
        r#"
        CREATE TABLE "4600010296_servicos" (
            id_atividade TEXT,
            tipo_atividade_1 TEXT,
            data_servico TEXT,
            inicio_servico TEXT,
            fim_servico TEXT,
            duracao TEXT,
            id_recurso TEXT,
            recurso TEXT,
            label_veiculo TEXT,
            idmatriculalider TEXT,
            idmatriculaauxiliares TEXT,
            idmatriculaguarda TEXT,
            status_atividade TEXT,
            coordenada_x TEXT,
            coordenada_y TEXT,
            ordem_servico TEXT,
            tipo_nota_servico TEXT,
            numero_instalacao TEXT,
            area_trabalho TEXT
        );
        CREATE TABLE ofs_notas_equipamentos (
            numero_nota TEXT,
            secao_nome TEXT,
            material TEXT,
            descricao TEXT,
            tipo_equipamento TEXT,
            quantidade TEXT,
            numero_serie TEXT,
            projeto TEXT,
            dados_json TEXT
        );
        CREATE TABLE lote_material (
            lote TEXT,
            descricao TEXT
        );
        CREATE TABLE ofs_apr (
            numero_nota TEXT,
            card_numero TEXT,
            pergunta_texto TEXT,
            item_numero TEXT,
            item_texto TEXT,
            resposta TEXT
        );
        "#,
    )
    .expect("create tables");

    let shift = "Início de turno";
    let services: &[[Option<&str>; 19]] = &[
        // shift starts inside the week
        [Some("A1"), Some(shift), Some("2024-01-01"), Some("07:30:00"), Some("16:00:00"), Some("510"), Some("R1"), Some("EQP-VR-01"), Some("VAN-1"), Some("111.0"), Some("222.0"), None, Some("concluído"), None, None, None, None, None, None],
        [Some("A2"), Some(shift), Some("2024-01-01"), Some("07:00:00"), Some("15:30:00"), Some("510"), Some("R2"), Some("EQP-VR-02"), Some("VAN-2"), Some("333"), None, None, Some("concluído"), None, None, None, None, None, None],
        [Some("A3"), Some(shift), Some("2024-01-03"), Some("08:00:00"), Some("17:00:00"), Some("540"), Some("R3"), Some("EQP-BP-01"), Some("VAN-3"), None, None, None, Some("concluído"), None, None, None, None, None, None],
        [Some("A4"), Some(shift), Some("2024-01-07"), Some("06:45:00"), Some("15:00:00"), Some("495"), Some("R1"), Some("EQP-VR-01"), Some("VAN-1"), Some("111"), Some("222"), None, Some("concluído"), None, None, None, None, None, None],
        [Some("A7"), Some(shift), Some("2024-01-02"), Some("07:15:00"), Some("16:15:00"), Some("540"), Some("R9"), Some("EQP-XX-09"), None, None, None, None, Some("concluído"), None, None, None, None, None, None],
        // shift starts just outside the week
        [Some("A5"), Some(shift), Some("2024-01-08"), Some("07:00:00"), Some("16:00:00"), Some("540"), Some("R1"), Some("EQP-VR-01"), Some("VAN-1"), Some("111"), Some("222"), None, Some("concluído"), None, None, None, None, None, None],
        [Some("A6"), Some(shift), Some("2023-12-31"), Some("07:00:00"), Some("16:00:00"), Some("540"), Some("R6"), Some("EQP-TR-01"), None, Some("444"), None, None, Some("concluído"), None, None, None, None, None, None],
        // field work
        [Some("A8"), Some("Instalação - Troca de medidor"), Some("2024-01-02"), Some("09:00:00"), Some("10:00:00"), Some("60"), Some("R1"), Some("EQP-VR-01"), None, None, None, None, Some("pendente"), Some("-44.1"), Some("-22.5"), Some("000123456"), Some("BB"), Some("1000.0"), Some("AT - 750")],
        [Some("A9"), Some("Retirada - Lacre - Poste"), Some("2024-01-05"), Some("11:00:00"), Some("12:00:00"), Some("60"), Some("R3"), Some("EQP-BP-01"), None, None, None, None, Some("concluído"), None, None, Some("000777"), Some("CC"), Some("2000"), Some("AT - 700")],
        [Some("A10"), Some("Inspeção"), Some("2024-01-04"), Some("13:00:00"), Some("14:00:00"), Some("60"), Some("R6"), Some("EQP-TR-01"), None, None, None, None, Some("pendente"), None, None, None, None, None, None],
    ];
    for row in services {
        conn.execute(
            r#"INSERT INTO "4600010296_servicos" VALUES
               (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)"#,
            rusqlite::params_from_iter(row.iter()),
        )
        .expect("insert service");
    }

    let equipment: &[[Option<&str>; 9]] = &[
        [Some("123456"), Some("INST"), Some("000000000000391000"), Some("Medidor"), Some("Medidor"), Some("1 u"), Some("000SN1"), Some("P1"), Some("{}")],
        [Some("123456"), Some("INST"), None, None, Some("Lacre"), None, None, Some("P1"), Some(r#"{"Tipo de Lacre":"SELO"}"#)],
        [Some("777"), Some("RET"), None, None, Some("Lacre"), None, None, None, Some(r#"{"Tipo de Lacre":"SELO"}"#)],
        [Some("777"), Some("EXEC"), None, None, Some("Lacre"), None, None, None, Some(r#"{"Tipo de Lacre":"TRAVA"}"#)],
    ];
    for row in equipment {
        conn.execute(
            "INSERT INTO ofs_notas_equipamentos VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params_from_iter(row.iter()),
        )
        .expect("insert equipment");
    }

    for (lot, description) in [
        ("391000", "Medidor monofásico"),
        ("391087", "Selo BB/BD"),
        ("399127", "Selo padrão"),
        ("399108", "Trava"),
    ] {
        conn.execute(
            "INSERT INTO lote_material VALUES (?1, ?2)",
            params![lot, description],
        )
        .expect("insert lot");
    }

    for (note, card, question, item, item_text, answer) in [
        ("123456", "1", "EPI", "1", "Capacete", "Sim"),
        ("123456", "1", "EPI", "2", "Luvas", "Sim"),
        ("777", "1", "EPI", "1", "Capacete", "Não"),
    ] {
        conn.execute(
            "INSERT INTO ofs_apr VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![note, card, question, item, item_text, answer],
        )
        .expect("insert checklist");
    }

    path
}
