//! Scheduler del escaneo de renovaciones
//!
//! Dispara el escaneo todos los días a las 06:00 y además los lunes a las
//! 09:00, siempre en IST. El resultado de cada ejecución queda solo en logs.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc, Weekday};
use sqlx::PgPool;
use tracing::{error, info};

use super::renewal_scanner::{ist, RenewalScannerService};

const DAILY_HOUR: u32 = 6;
const WEEKLY_WEEKDAY: Weekday = Weekday::Mon;
const WEEKLY_HOUR: u32 = 9;

fn at(date: NaiveDate, hour: u32, tz: FixedOffset) -> DateTime<FixedOffset> {
    // Un offset fijo no tiene huecos ni ambigüedades de DST
    date.and_hms_opt(hour, 0, 0)
        .and_then(|dt| dt.and_local_timezone(tz).single())
        .expect("wall-clock time with fixed offset")
}

/// Próxima ejecución diaria (06:00) estrictamente después de `after`
pub fn next_daily_fire(after: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let tz = after.timezone();
    let candidate = at(after.date_naive(), DAILY_HOUR, tz);
    if candidate > after {
        candidate
    } else {
        candidate + Duration::days(1)
    }
}

/// Próxima ejecución semanal (lunes 09:00) estrictamente después de `after`
pub fn next_weekly_fire(after: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let tz = after.timezone();
    let days_ahead = (WEEKLY_WEEKDAY.num_days_from_monday() as i64
        - after.weekday().num_days_from_monday() as i64)
        .rem_euclid(7);
    let candidate = at(after.date_naive() + Duration::days(days_ahead), WEEKLY_HOUR, tz);
    if candidate > after {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}

/// Próximo disparo entre ambas programaciones
pub fn next_fire(after: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    next_daily_fire(after).min(next_weekly_fire(after))
}

/// Loop del scheduler. Se lanza como tarea de fondo desde main y no retorna.
pub async fn run_renewal_scheduler(pool: PgPool) {
    let scanner = RenewalScannerService::new(pool);

    info!(
        "⏰ Scheduler de renovaciones iniciado (diario {:02}:00, {:?} {:02}:00 IST)",
        DAILY_HOUR, WEEKLY_WEEKDAY, WEEKLY_HOUR
    );

    loop {
        let now = Utc::now().with_timezone(&ist());
        let next = next_fire(now);
        let wait = (next - now)
            .to_std()
            .unwrap_or_else(|_| std::time::Duration::from_secs(60));

        info!("⏰ Próximo escaneo programado: {}", next);
        tokio::time::sleep(wait).await;

        match scanner.run_check().await {
            Ok(data) => {
                info!("✅ Escaneo programado completado: {} vencimientos nuevos", data.total)
            }
            Err(e) => error!("❌ Error en escaneo programado: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ist_datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        ist().with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_next_daily_fire_before_six() {
        // 2025-06-11 es miércoles
        let after = ist_datetime(2025, 6, 11, 5, 30);
        assert_eq!(next_daily_fire(after), ist_datetime(2025, 6, 11, 6, 0));
    }

    #[test]
    fn test_next_daily_fire_after_six_rolls_over() {
        let after = ist_datetime(2025, 6, 11, 6, 0);
        assert_eq!(next_daily_fire(after), ist_datetime(2025, 6, 12, 6, 0));
    }

    #[test]
    fn test_next_weekly_fire_same_week() {
        // Miércoles -> lunes siguiente
        let after = ist_datetime(2025, 6, 11, 12, 0);
        let next = next_weekly_fire(after);
        assert_eq!(next, ist_datetime(2025, 6, 16, 9, 0));
        assert_eq!(next.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_next_weekly_fire_monday_morning() {
        // 2025-06-16 es lunes; antes de las 09:00 dispara ese mismo día
        let after = ist_datetime(2025, 6, 16, 8, 0);
        assert_eq!(next_weekly_fire(after), ist_datetime(2025, 6, 16, 9, 0));

        // A las 09:00 exactas ya pasó, salta una semana
        let after = ist_datetime(2025, 6, 16, 9, 0);
        assert_eq!(next_weekly_fire(after), ist_datetime(2025, 6, 23, 9, 0));
    }

    #[test]
    fn test_next_fire_prefers_earliest() {
        // Domingo por la tarde: el diario de las 06:00 del lunes llega antes
        // que el semanal de las 09:00
        let after = ist_datetime(2025, 6, 15, 18, 0);
        assert_eq!(next_fire(after), ist_datetime(2025, 6, 16, 6, 0));
    }
}
