//! Escáner de vencimientos de renovación
//!
//! Recorre las seis categorías de documentos estatutarios, clasifica cada
//! vigencia contra la fecha actual y una ventana de 30 días, y genera
//! vencimientos deduplicados en renewal_dues. Todo el escaneo corre dentro
//! de una única transacción; cada categoría usa su propio savepoint para
//! que un fallo local no aborte las demás.

use std::collections::HashSet;

use chrono::{Duration, FixedOffset, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{Acquire, PgConnection, PgPool};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::dto::renewal_dto::{AutoCheckData, RenewalCheckData, RenewalStatusEntry};
use crate::models::renewal_due::RenewalType;
use crate::repositories::renewal_repository::RenewalRepository;
use crate::utils::errors::AppError;

/// Ventana de anticipación para vencimientos próximos
pub const LOOKAHEAD_DAYS: i64 = 30;

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Zona horaria fija de la autoridad (IST, +05:30)
pub fn ist() -> FixedOffset {
    // Offset constante dentro de rango, la construcción no puede fallar
    FixedOffset::east_opt(IST_OFFSET_SECS).expect("IST offset")
}

/// Fecha actual (solo fecha) en IST
pub fn today_ist() -> NaiveDate {
    Utc::now().with_timezone(&ist()).date_naive()
}

/// Clasificación de una vigencia contra la ventana del escaneo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueClass {
    Expired,
    DueSoon,
    Future,
}

/// Clasifica una fecha de fin de vigencia. Ambos extremos de la ventana
/// son inclusivos: E == current y E == lookahead cuentan como DueSoon.
pub fn classify(expiry: NaiveDate, current: NaiveDate, lookahead: NaiveDate) -> DueClass {
    if expiry < current {
        DueClass::Expired
    } else if expiry <= lookahead {
        DueClass::DueSoon
    } else {
        DueClass::Future
    }
}

/// Identificador de categoría en el resumen del escaneo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKey {
    Puc,
    Insurance,
    Tax,
    Fitness,
    Permit,
    TaxDetails,
}

/// Configuración de una categoría de escaneo
pub struct CategoryConfig {
    pub key: CategoryKey,
    pub source_table: &'static str,
    pub vehicle_id_column: &'static str,
    pub expiry_column: &'static str,
    pub renewal_type: RenewalType,
    pub fee: i64,
    pub transport_only: bool,
}

/// Las seis categorías del escaneo. El impuesto a nivel de vehículo vive
/// en la propia tabla vehicles, por eso su columna de vehículo es 'id'.
pub fn category_configs() -> [CategoryConfig; 6] {
    [
        CategoryConfig {
            key: CategoryKey::Puc,
            source_table: "puc_details",
            vehicle_id_column: "vehicle_id",
            expiry_column: "puc_to",
            renewal_type: RenewalType::Puc,
            fee: 500,
            transport_only: false,
        },
        CategoryConfig {
            key: CategoryKey::Insurance,
            source_table: "insurance_details",
            vehicle_id_column: "vehicle_id",
            expiry_column: "insurance_to",
            renewal_type: RenewalType::Insurance,
            fee: 2000,
            transport_only: false,
        },
        CategoryConfig {
            key: CategoryKey::Tax,
            source_table: "vehicles",
            vehicle_id_column: "id",
            expiry_column: "tax_upto",
            renewal_type: RenewalType::Tax,
            fee: 1500,
            transport_only: false,
        },
        CategoryConfig {
            key: CategoryKey::Fitness,
            source_table: "fitness_details",
            vehicle_id_column: "vehicle_id",
            expiry_column: "fc_tenure_to",
            renewal_type: RenewalType::Fc,
            fee: 800,
            transport_only: true,
        },
        CategoryConfig {
            key: CategoryKey::Permit,
            source_table: "permit_details",
            vehicle_id_column: "vehicle_id",
            expiry_column: "permit_tenure_to",
            renewal_type: RenewalType::Permit,
            fee: 1000,
            transport_only: true,
        },
        CategoryConfig {
            key: CategoryKey::TaxDetails,
            source_table: "tax_details",
            vehicle_id_column: "vehicle_id",
            expiry_column: "tax_tenure_to",
            renewal_type: RenewalType::Tax,
            fee: 1500,
            transport_only: true,
        },
    ]
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct CandidateDocument {
    vehicle_id: Uuid,
    expiry: NaiveDate,
}

/// Resultado del escaneo de una categoría
#[derive(Debug, Default)]
struct CategoryScanOutcome {
    inserted: u64,
    expired: usize,
    due_soon: usize,
}

/// SQL de candidatos de una categoría. Los nombres de tabla y columna
/// vienen de la tabla de configuración estática, nunca de entrada externa.
fn candidate_query(cfg: &CategoryConfig) -> String {
    if cfg.transport_only {
        format!(
            "SELECT d.{vid} AS vehicle_id, d.{exp} AS expiry \
             FROM {table} d \
             JOIN vehicles v ON v.id = d.{vid} \
             WHERE d.{exp} IS NOT NULL AND d.{exp} <= $1 \
               AND v.vehicle_type = 'Transport' \
             ORDER BY d.{exp}",
            vid = cfg.vehicle_id_column,
            exp = cfg.expiry_column,
            table = cfg.source_table,
        )
    } else {
        format!(
            "SELECT d.{vid} AS vehicle_id, d.{exp} AS expiry \
             FROM {table} d \
             WHERE d.{exp} IS NOT NULL AND d.{exp} <= $1 \
             ORDER BY d.{exp}",
            vid = cfg.vehicle_id_column,
            exp = cfg.expiry_column,
            table = cfg.source_table,
        )
    }
}

/// Elimina duplicados (vehicle_id, expiry) dentro del lote, conservando la
/// primera aparición. Protege contra filas duplicadas en la tabla origen.
fn dedup_candidates(candidates: Vec<CandidateDocument>) -> Vec<CandidateDocument> {
    let mut seen: HashSet<(Uuid, NaiveDate)> = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert((c.vehicle_id, c.expiry)))
        .collect()
}

// Inserta un vencimiento si no hay otro activo con la misma clave natural.
// El guard NOT EXISTS se complementa con el índice único parcial de la
// tabla, así dos escaneos concurrentes tampoco pueden duplicar.
const INSERT_DUE_SQL: &str = r#"
INSERT INTO renewal_dues (id, vehicle_id, renewal_type, due_date, amount, status, created_at, updated_at)
SELECT $1, $2, $3, $4, $5, 'pending', NOW(), NOW()
WHERE NOT EXISTS (
    SELECT 1 FROM renewal_dues
    WHERE vehicle_id = $2 AND renewal_type = $3 AND due_date = $4 AND status <> 'completed'
)
ON CONFLICT (vehicle_id, renewal_type, due_date) WHERE status <> 'completed' DO NOTHING
"#;

async fn scan_category(
    conn: &mut PgConnection,
    cfg: &CategoryConfig,
    current: NaiveDate,
    lookahead: NaiveDate,
) -> Result<CategoryScanOutcome, AppError> {
    let sql = candidate_query(cfg);
    let candidates = sqlx::query_as::<_, CandidateDocument>(&sql)
        .bind(lookahead)
        .fetch_all(&mut *conn)
        .await?;

    let candidates = dedup_candidates(candidates);

    let mut outcome = CategoryScanOutcome::default();
    for candidate in &candidates {
        match classify(candidate.expiry, current, lookahead) {
            DueClass::Expired => outcome.expired += 1,
            DueClass::DueSoon => outcome.due_soon += 1,
            DueClass::Future => continue,
        }

        let result = sqlx::query(INSERT_DUE_SQL)
            .bind(Uuid::new_v4())
            .bind(candidate.vehicle_id)
            .bind(cfg.renewal_type.as_str())
            .bind(candidate.expiry)
            .bind(Decimal::from(cfg.fee))
            .execute(&mut *conn)
            .await?;

        outcome.inserted += result.rows_affected();
    }

    info!(
        "📋 {}: {} vencidos, {} por vencer, {} vencimientos nuevos",
        cfg.source_table, outcome.expired, outcome.due_soon, outcome.inserted
    );

    Ok(outcome)
}

async fn fetch_status_snapshot(
    conn: &mut PgConnection,
    current: NaiveDate,
    lookahead: NaiveDate,
) -> Result<Vec<RenewalStatusEntry>, AppError> {
    let entries = sqlx::query_as::<_, RenewalStatusEntry>(
        r#"
        SELECT renewal_type,
               COUNT(*) AS total_count,
               COUNT(*) FILTER (WHERE due_date < $1) AS expired_count,
               COUNT(*) FILTER (WHERE due_date >= $1 AND due_date <= $2) AS due_soon_count
        FROM renewal_dues
        WHERE status = 'pending'
        GROUP BY renewal_type
        ORDER BY renewal_type
        "#,
    )
    .bind(current)
    .bind(lookahead)
    .fetch_all(&mut *conn)
    .await?;

    Ok(entries)
}

/// Servicio orquestador del escaneo de renovaciones
pub struct RenewalScannerService {
    pool: PgPool,
}

impl RenewalScannerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ejecuta el escaneo completo: las seis categorías en secuencia dentro
    /// de una transacción, más el snapshot de estado. Un fallo de categoría
    /// se registra con conteo cero y el escaneo continúa; un fallo fuera de
    /// ese manejo revierte la transacción entera.
    pub async fn run_check(&self) -> Result<RenewalCheckData, AppError> {
        let current = today_ist();
        let lookahead = current + Duration::days(LOOKAHEAD_DAYS);

        info!(
            "🔍 Iniciando escaneo de renovaciones: hoy {} / ventana hasta {}",
            current, lookahead
        );

        let mut tx = self.pool.begin().await?;
        let mut data = RenewalCheckData::default();

        for cfg in category_configs() {
            let mut savepoint = tx.begin().await?;

            let inserted = match scan_category(&mut *savepoint, &cfg, current, lookahead).await {
                Ok(outcome) => {
                    savepoint.commit().await?;
                    outcome.inserted
                }
                Err(e) => {
                    warn!(
                        "⚠️ Error escaneando {}, la categoría queda en cero: {}",
                        cfg.source_table, e
                    );
                    savepoint.rollback().await?;
                    0
                }
            };

            match cfg.key {
                CategoryKey::Puc => data.puc = inserted,
                CategoryKey::Insurance => data.insurance = inserted,
                CategoryKey::Tax => data.tax = inserted,
                CategoryKey::Fitness => data.fitness = inserted,
                CategoryKey::Permit => data.permit = inserted,
                CategoryKey::TaxDetails => data.tax_details = inserted,
            }
            data.total += inserted;
        }

        data.current_status = fetch_status_snapshot(&mut *tx, current, lookahead).await?;

        tx.commit().await?;

        info!("✅ Escaneo completado: {} vencimientos nuevos", data.total);

        Ok(data)
    }

    /// Auto-check diario invocado desde el login. Throttle grueso: si ya
    /// se creó algún vencimiento hoy, se omite el escaneo. Nunca propaga
    /// errores; el flujo de login no debe bloquearse por esto.
    pub async fn auto_check(&self) -> AutoCheckData {
        let repository = RenewalRepository::new(self.pool.clone());

        match repository.dues_created_today(today_ist()).await {
            Ok(true) => {
                info!("⏭️ Auto-check omitido: ya se generaron vencimientos hoy");
                AutoCheckData {
                    skipped: true,
                    warning: None,
                    data: None,
                }
            }
            Ok(false) => match self.run_check().await {
                Ok(data) => AutoCheckData {
                    skipped: false,
                    warning: None,
                    data: Some(data),
                },
                Err(e) => {
                    error!("❌ Auto-check falló, el login continúa: {}", e);
                    AutoCheckData {
                        skipped: false,
                        warning: Some(format!("El escaneo automático falló: {}", e)),
                        data: None,
                    }
                }
            },
            Err(e) => {
                error!("❌ Auto-check no pudo consultar el throttle: {}", e);
                AutoCheckData {
                    skipped: false,
                    warning: Some(format!("El escaneo automático falló: {}", e)),
                    data: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_classify_expired() {
        let current = date(2025, 6, 15);
        let lookahead = current + Duration::days(LOOKAHEAD_DAYS);

        assert_eq!(classify(date(2025, 6, 14), current, lookahead), DueClass::Expired);
        assert_eq!(classify(date(2024, 1, 1), current, lookahead), DueClass::Expired);
    }

    #[test]
    fn test_classify_window_bounds_inclusive() {
        let current = date(2025, 6, 15);
        let lookahead = current + Duration::days(LOOKAHEAD_DAYS);

        // Ambos extremos cuentan como DueSoon
        assert_eq!(classify(current, current, lookahead), DueClass::DueSoon);
        assert_eq!(classify(lookahead, current, lookahead), DueClass::DueSoon);
        assert_eq!(classify(date(2025, 7, 15), current, lookahead), DueClass::DueSoon);
    }

    #[test]
    fn test_classify_future_past_window() {
        let current = date(2025, 6, 15);
        let lookahead = current + Duration::days(LOOKAHEAD_DAYS);

        // current + 31 días queda fuera de la ventana
        assert_eq!(
            classify(lookahead + Duration::days(1), current, lookahead),
            DueClass::Future
        );
    }

    #[test]
    fn test_dedup_candidates_keeps_first() {
        let v1 = Uuid::new_v4();
        let v2 = Uuid::new_v4();
        let d = date(2025, 6, 1);

        let deduped = dedup_candidates(vec![
            CandidateDocument { vehicle_id: v1, expiry: d },
            CandidateDocument { vehicle_id: v1, expiry: d },
            CandidateDocument { vehicle_id: v2, expiry: d },
            CandidateDocument { vehicle_id: v1, expiry: date(2025, 6, 2) },
        ]);

        assert_eq!(deduped.len(), 3);
        assert_eq!(deduped[0].vehicle_id, v1);
        assert_eq!(deduped[1].vehicle_id, v2);
    }

    #[test]
    fn test_category_configs_fees_and_labels() {
        let configs = category_configs();
        assert_eq!(configs.len(), 6);

        let by_key = |key: CategoryKey| {
            configs
                .iter()
                .find(|c| c.key == key)
                .unwrap_or_else(|| panic!("missing category {:?}", key))
        };

        assert_eq!(by_key(CategoryKey::Puc).fee, 500);
        assert_eq!(by_key(CategoryKey::Insurance).fee, 2000);
        assert_eq!(by_key(CategoryKey::Tax).fee, 1500);
        assert_eq!(by_key(CategoryKey::Fitness).fee, 800);
        assert_eq!(by_key(CategoryKey::Permit).fee, 1000);
        assert_eq!(by_key(CategoryKey::TaxDetails).fee, 1500);

        // Las dos categorías de impuesto comparten etiqueta 'Tax'
        assert_eq!(by_key(CategoryKey::Tax).renewal_type, RenewalType::Tax);
        assert_eq!(by_key(CategoryKey::TaxDetails).renewal_type, RenewalType::Tax);
    }

    #[test]
    fn test_category_configs_transport_gating() {
        for cfg in category_configs() {
            let expected = matches!(
                cfg.key,
                CategoryKey::Fitness | CategoryKey::Permit | CategoryKey::TaxDetails
            );
            assert_eq!(cfg.transport_only, expected, "{:?}", cfg.key);
        }
    }

    #[test]
    fn test_candidate_query_joins_only_for_transport() {
        let configs = category_configs();

        for cfg in &configs {
            let sql = candidate_query(cfg);
            assert_eq!(sql.contains("JOIN vehicles"), cfg.transport_only, "{:?}", cfg.key);
            assert!(sql.contains(cfg.source_table));
            assert!(sql.contains(cfg.expiry_column));
        }
    }

    #[test]
    fn test_vehicle_level_tax_reads_vehicles_table() {
        let configs = category_configs();
        let tax = configs
            .iter()
            .find(|c| c.key == CategoryKey::Tax)
            .unwrap();

        assert_eq!(tax.source_table, "vehicles");
        assert_eq!(tax.vehicle_id_column, "id");

        let sql = candidate_query(tax);
        assert!(sql.contains("d.id AS vehicle_id"));
    }
}
