/// A contiguous run of frame rows, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    pub start: u32,
    pub end: u32,
}

impl RowBand {
    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.end - self.start
    }
}

/// Splits `height` rows into at most `worker_count` contiguous bands. Every
/// band gets `height / worker_count` rows and the last band absorbs the
/// remainder, so worker counts that do not divide the height stay covered
/// without gaps or overlap.
#[must_use]
pub fn partition_rows(height: u32, worker_count: usize) -> Vec<RowBand> {
    if height == 0 {
        return Vec::new();
    }

    let workers = worker_count.min(height as usize).max(1) as u32;
    let rows_per_band = height / workers;

    (0..workers)
        .map(|band| {
            let start = band * rows_per_band;
            let end = if band == workers - 1 {
                height
            } else {
                start + rows_per_band
            };
            RowBand { start, end }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let bands = partition_rows(8, 4);

        assert_eq!(
            bands,
            vec![
                RowBand { start: 0, end: 2 },
                RowBand { start: 2, end: 4 },
                RowBand { start: 4, end: 6 },
                RowBand { start: 6, end: 8 },
            ]
        );
    }

    #[test]
    fn test_last_band_absorbs_remainder() {
        let bands = partition_rows(10, 3);

        assert_eq!(
            bands,
            vec![
                RowBand { start: 0, end: 3 },
                RowBand { start: 3, end: 6 },
                RowBand { start: 6, end: 10 },
            ]
        );
    }

    #[test]
    fn test_workers_clamped_to_height() {
        let bands = partition_rows(3, 16);

        assert_eq!(bands.len(), 3);
        assert!(bands.iter().all(|band| band.row_count() == 1));
    }

    #[test]
    fn test_single_worker_takes_everything() {
        let bands = partition_rows(600, 1);

        assert_eq!(bands, vec![RowBand { start: 0, end: 600 }]);
    }

    #[test]
    fn test_bands_are_contiguous_and_cover_all_rows() {
        for workers in [1, 2, 3, 5, 7, 8, 64] {
            let bands = partition_rows(480, workers);

            assert_eq!(bands[0].start, 0);
            assert_eq!(bands[bands.len() - 1].end, 480);
            for pair in bands.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn test_zero_height_yields_no_bands() {
        assert!(partition_rows(0, 4).is_empty());
    }
}
