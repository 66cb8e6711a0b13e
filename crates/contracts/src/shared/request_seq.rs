//! Упорядочивание ответов на пересекающиеся запросы.
//!
//! Каждый запрос получает возрастающий токен; ответ применяется, только если
//! его токен совпадает с последним выданным. Более ранние ответы отбрасываются.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.issued != 0 && token.0 == self.issued
    }
}
