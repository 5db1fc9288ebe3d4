// ==========================================
// Test data builders - for integration tests
// ==========================================

use binari_ammissibili::domain::track::{TrackData, TrackDataset};
use binari_ammissibili::domain::train::TrainRequest;

// ==========================================
// TrackDataset builder
// ==========================================

pub struct DatasetBuilder {
    dataset: TrackDataset,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self {
            dataset: TrackDataset::new(),
        }
    }

    /// Track with a high platform of the given total length
    pub fn track(mut self, name: &str, total_m: i64) -> Self {
        self.dataset.insert(
            name.to_string(),
            TrackData {
                marciapiede_complessivo_m: Some(total_m),
                marciapiede_alto_m: total_m,
                marciapiede_basso_m: 0,
                capacita_funzionale_m: None,
                signal_code: None,
            },
        );
        self
    }

    /// Track with explicit platform profile
    pub fn track_full(mut self, name: &str, total_m: i64, alto_m: i64, basso_m: i64) -> Self {
        self.dataset.insert(
            name.to_string(),
            TrackData {
                marciapiede_complessivo_m: Some(total_m),
                marciapiede_alto_m: alto_m,
                marciapiede_basso_m: basso_m,
                capacita_funzionale_m: None,
                signal_code: None,
            },
        );
        self
    }

    /// Platformless track with a functional capacity figure
    pub fn service_track(mut self, name: &str, capacity_m: i64) -> Self {
        self.dataset.insert(
            name.to_string(),
            TrackData {
                marciapiede_complessivo_m: Some(0),
                marciapiede_alto_m: 0,
                marciapiede_basso_m: 0,
                capacita_funzionale_m: Some(capacity_m),
                signal_code: None,
            },
        );
        self
    }

    /// Attach a signal code to an already-added track
    pub fn signal(mut self, name: &str, code: &str) -> Self {
        if let Some(data) = self.dataset.get_mut(name) {
            data.signal_code = Some(code.to_string());
        }
        self
    }

    pub fn build(self) -> TrackDataset {
        self.dataset
    }
}

// ==========================================
// TrainRequest builder
// ==========================================

pub struct TrainBuilder {
    train: TrainRequest,
}

impl TrainBuilder {
    pub fn new(train_code: &str) -> Self {
        Self {
            train: TrainRequest {
                train_code: train_code.to_string(),
                train_length_m: 200,
                train_category: "REG".to_string(),
                is_prm: false,
                planned_track: None,
                planned_signal: None,
            },
        }
    }

    pub fn length(mut self, metres: i64) -> Self {
        self.train.train_length_m = metres;
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.train.train_category = category.to_string();
        self
    }

    pub fn planned(mut self, track: &str) -> Self {
        self.train.planned_track = Some(track.to_string());
        self
    }

    pub fn planned_signal(mut self, signal: &str) -> Self {
        self.train.planned_signal = Some(signal.to_string());
        self
    }

    pub fn prm(mut self) -> Self {
        self.train.is_prm = true;
        self
    }

    pub fn build(self) -> TrainRequest {
        self.train
    }
}
