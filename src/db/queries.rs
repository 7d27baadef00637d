//! One statement per dashboard view.
//!
//! Every function is pure: it only assembles SQL and bound values. Filters
//! become `AND` clauses only when supplied.

use crate::db::dialect::{DatePart, Dialect};
use crate::db::query::{Catalog, Query, QueryBuilder};
use crate::models::activity::SHIFT_START_ACTIVITY;
use crate::models::equipment::{
    DONE_STATUS, LOT_OVERRIDES, NoteTypes, SEAL_EQUIPMENT_TYPE, SEAL_SUBTYPE_KEY,
};
use crate::models::filter::ViewFilter;
use crate::models::overview::PENDING_STATUS;
use crate::models::region::{OTHER_REGION_LABEL, Region};

/// Shift-start activity with derived region and composition.
/// Ordered by service date, then start time.
pub fn shift_start(catalog: &Catalog, filter: &ViewFilter) -> Query {
    let d = catalog.dialect;
    let base = format!(
        "SELECT
    s.tipo_atividade_1 AS tipo_atividade,
    s.data_servico,
    {start} AS inicio_servico,
    {end} AS fim_servico,
    CAST(s.duracao AS TEXT) AS duracao,
    s.id_recurso,
    s.recurso,
    s.label_veiculo,
    split_part(s.idmatriculalider, '.', 1) AS idmatriculalider,
    split_part(s.idmatriculaauxiliares, '.', 1) AS idmatriculaauxiliares,
    split_part(s.idmatriculaguarda, '.', 1) AS idmatriculaguarda,
    {region} AS regional,
    {composition} AS composicao
FROM {services} s
WHERE 1=1",
        start = d.time_text("s.inicio_servico"),
        end = d.time_text("s.fim_servico"),
        region = region_case(d, "s.recurso"),
        composition = composition_case(),
        services = catalog.services(),
    );

    let mut qb = QueryBuilder::new(d, base);
    qb.and_eq("s.tipo_atividade_1", SHIFT_START_ACTIVITY)
        .date_bounds("s.data_servico", filter)
        .region("s.recurso", filter.region);
    qb.order_by("s.data_servico, s.inicio_servico")
}

/// Shift-start records reduced to date parts, region and composition.
pub fn drilldown(catalog: &Catalog, filter: &ViewFilter) -> Query {
    let d = catalog.dialect;
    let base = format!(
        "SELECT
    s.data_servico,
    {year} AS ano,
    {month} AS mes,
    {day} AS dia,
    s.recurso,
    {region} AS regional,
    {composition} AS composicao
FROM {services} s
WHERE 1=1",
        year = d.date_part(DatePart::Year, "s.data_servico"),
        month = d.date_part(DatePart::Month, "s.data_servico"),
        day = d.date_part(DatePart::Day, "s.data_servico"),
        region = region_case(d, "s.recurso"),
        composition = composition_case(),
        services = catalog.services(),
    );

    let mut qb = QueryBuilder::new(d, base);
    qb.and_eq("s.tipo_atividade_1", SHIFT_START_ACTIVITY)
        .date_bounds("s.data_servico", filter)
        .region("s.recurso", filter.region);
    qb.order_by("s.data_servico")
}

/// Equipment/material lines joined to their service and to the lot table.
/// Region is not applied: this view is filtered by operational base locally.
pub fn equipment_notes(catalog: &Catalog, filter: &ViewFilter) -> Query {
    let d = catalog.dialect;
    let base = format!(
        "SELECT
    s.data_servico AS \"Data\",
    one.numero_nota AS \"Nota\",
    trim({short_text}) AS \"Texto Breve\",
    one.secao_nome AS \"Ação\",
    CASE
        WHEN s.status_atividade = '{done}' THEN 'EXEC'
        ELSE s.status_atividade
    END AS \"Status Usuário\",
    s.tipo_nota_servico AS \"Tipo de Nota\",
    CASE
        WHEN s.numero_instalacao LIKE '%.0' THEN substr(s.numero_instalacao, 1, length(s.numero_instalacao) - 2)
        ELSE s.numero_instalacao
    END AS \"Instalação\",
    '' AS \"Zona\",
    CASE
        WHEN one.material IS NULL THEN l.lote
        ELSE ltrim(one.material, '0')
    END AS \"Lote\",
    COALESCE(l.descricao, one.descricao, one.tipo_equipamento) AS \"Descricao\",
    {quantity} AS \"Quantidade\",
    ltrim(one.numero_serie, '0') AS \"Serial\",
    one.projeto AS \"Projeto\",
    {base_case} AS \"Base Operacional\"
FROM {equipment} one
LEFT JOIN {services} s
    ON one.numero_nota = ltrim(s.ordem_servico, '0')
LEFT JOIN {lots} l
    ON {lot_case} = l.lote
WHERE 1=1",
        short_text = d.regex_capture("s.tipo_atividade_1", " - (.+)$"),
        done = DONE_STATUS,
        quantity = d.trim_chars("one.quantidade", " u"),
        base_case = work_area_case("s.area_trabalho"),
        equipment = catalog.qualify(&catalog.equipment_table),
        services = catalog.services(),
        lots = catalog.qualify(&catalog.lot_table),
        lot_case = lot_case(d),
    );

    let mut qb = QueryBuilder::new(d, base);
    qb.date_bounds("s.data_servico", filter);
    qb.order_by("s.data_servico, one.numero_nota")
}

/// Safety checklist (APR) answers joined to their service.
pub fn safety_checklist(catalog: &Catalog, filter: &ViewFilter) -> Query {
    let base = format!(
        "SELECT
    s.data_servico AS \"Data\",
    s.recurso AS \"Equipe\",
    oa.numero_nota AS \"Nota\",
    oa.card_numero AS \"Nº Pergunta\",
    oa.pergunta_texto AS \"Pergunta\",
    oa.item_numero AS \"Nº Item\",
    oa.item_texto AS \"Item\",
    oa.resposta AS \"Resposta\"
FROM {checklist} oa
LEFT JOIN {services} s
    ON oa.numero_nota = ltrim(s.ordem_servico, '0')
WHERE 1=1",
        checklist = catalog.qualify(&catalog.checklist_table),
        services = catalog.services(),
    );

    let mut qb = QueryBuilder::new(catalog.dialect, base);
    qb.date_bounds("s.data_servico", filter);
    qb.order_by("s.data_servico, oa.numero_nota, oa.card_numero, oa.item_numero")
}

/// Activity totals per status, largest first.
pub fn status_counts(catalog: &Catalog, filter: &ViewFilter) -> Query {
    let base = format!(
        "SELECT
    s.status_atividade,
    COUNT(s.id_atividade) AS total
FROM {services} s
WHERE 1=1",
        services = catalog.services(),
    );

    let mut qb = QueryBuilder::new(catalog.dialect, base);
    qb.date_bounds("s.data_servico", filter);
    let mut query = qb.build();
    query
        .sql
        .push_str("\nGROUP BY s.status_atividade\nORDER BY total DESC, s.status_atividade");
    query
}

/// Activity totals per team (resource code) and status.
pub fn team_status_counts(catalog: &Catalog, filter: &ViewFilter) -> Query {
    let base = format!(
        "SELECT
    s.recurso,
    s.status_atividade,
    COUNT(s.id_atividade) AS total
FROM {services} s
WHERE s.recurso IS NOT NULL",
        services = catalog.services(),
    );

    let mut qb = QueryBuilder::new(catalog.dialect, base);
    qb.date_bounds("s.data_servico", filter);
    let mut query = qb.build();
    query.sql.push_str(
        "\nGROUP BY s.recurso, s.status_atividade\nORDER BY s.recurso, s.status_atividade",
    );
    query
}

/// Pending activities that carry coordinates.
pub fn map_points(catalog: &Catalog, filter: &ViewFilter) -> Query {
    let d = catalog.dialect;
    let base = format!(
        "SELECT
    s.id_atividade,
    s.recurso,
    s.status_atividade,
    CAST(s.coordenada_x AS {real}) AS coordenada_x,
    CAST(s.coordenada_y AS {real}) AS coordenada_y
FROM {services} s
WHERE s.coordenada_x IS NOT NULL
  AND s.coordenada_y IS NOT NULL",
        real = d.real_type(),
        services = catalog.services(),
    );

    let mut qb = QueryBuilder::new(d, base);
    qb.and_eq("s.status_atividade", PENDING_STATUS)
        .date_bounds("s.data_servico", filter);
    qb.order_by("s.data_servico, s.id_atividade")
}

// ---------------------------
// Derived columns
// ---------------------------

/// Region from a substring test on the resource code, `Outra` otherwise.
fn region_case(dialect: Dialect, column: &str) -> String {
    let mut sql = String::from("CASE");
    for region in Region::ALL {
        let test = dialect.contains(column, &format!("'{}'", region.code()));
        sql.push_str(&format!(" WHEN {test} THEN '{}'", region.label()));
    }
    sql.push_str(&format!(" ELSE '{OTHER_REGION_LABEL}' END"));
    sql
}

fn composition_case() -> String {
    "CASE WHEN s.idmatriculalider IS NOT NULL AND s.idmatriculaauxiliares IS NULL \
     THEN 'incompleta' ELSE 'completa' END"
        .to_string()
}

/// Operational base from the work-area code list, empty string otherwise.
fn work_area_case(column: &str) -> String {
    let code = format!("'L' || split_part({column}, ' - ', 2)");
    let mut sql = String::from("CASE");
    for region in Region::BY_WORK_AREA {
        let list = quoted_list(region.work_areas());
        sql.push_str(&format!(" WHEN {code} IN ({list}) THEN '{}'", region.label()));
    }
    sql.push_str(" ELSE '' END");
    sql
}

/// Lot code the equipment line is matched on.
fn lot_case(dialect: Dialect) -> String {
    let subtype = dialect.json_text("one.dados_json", SEAL_SUBTYPE_KEY);
    let mut sql = String::from("CASE");
    for rule in LOT_OVERRIDES {
        let mut when = format!(
            "one.tipo_equipamento = '{SEAL_EQUIPMENT_TYPE}' AND {subtype} = '{}'",
            rule.subtype
        );
        match rule.note_types {
            NoteTypes::Any => {}
            NoteTypes::In(types) => {
                when.push_str(&format!(" AND s.tipo_nota_servico IN ({})", quoted_list(types)))
            }
            NoteTypes::NotIn(types) => when.push_str(&format!(
                " AND s.tipo_nota_servico NOT IN ({})",
                quoted_list(types)
            )),
        }
        sql.push_str(&format!(" WHEN {when} THEN '{}'", rule.lot));
    }
    sql.push_str(" ELSE ltrim(one.material, '0') END");
    sql
}

fn quoted_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|i| format!("'{i}'"))
        .collect::<Vec<_>>()
        .join(",")
}
