use super::aggregate::Satellite;
use super::dto::{CategoryCounts, SatellitesResponse};
use super::error::LoadError;
use crate::shared::request_seq::{RequestSequence, RequestToken};

/// Состояние загрузки каталога: результат, счётчики, флаг и ошибка.
///
/// Сетевой вызов делает фронтенд; здесь только правила применения ответа.
/// Применяется лишь ответ на последний выданный запрос.
#[derive(Debug, Clone, Default)]
pub struct LoaderState {
    pub records: Vec<Satellite>,
    pub counts: Option<CategoryCounts>,
    pub loading: bool,
    pub error: Option<String>,
    seq: RequestSequence,
}

impl LoaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начало запроса: сбрасывает ошибку, выставляет флаг загрузки
    pub fn begin(&mut self) -> RequestToken {
        self.loading = true;
        self.error = None;
        self.seq.issue()
    }

    /// Применяет результат запроса `token`. Возвращает `false`, если ответ
    /// устарел и был отброшен.
    ///
    /// При ошибке список очищается, а счётчики остаются прежними.
    pub fn finish(
        &mut self,
        token: RequestToken,
        result: Result<SatellitesResponse, LoadError>,
    ) -> bool {
        if !self.seq.is_latest(token) {
            log::debug!("Discarding stale response #{}", token.value());
            return false;
        }

        self.loading = false;
        match result {
            Ok(response) => {
                self.records = response.data;
                self.counts = Some(response.counts);
                self.error = None;
            }
            Err(e) => {
                self.records.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }
}
