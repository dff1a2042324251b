//! 展示序列生成模块
//! 在数据源前后随机填充奖品，撑起滚动容器的宽度

use super::DrawError;
use rand::Rng;
use std::collections::VecDeque;

/// 生成页面呈现的奖品序列
///
/// - `source`: 数据源（至少一个奖品）
/// - `total`: 生成个数（界面需要展示的元素个数）
/// - `visible_count`: 一屏展示的个数（必须是奇数）
///
/// 数据源原样保留，前面随机填充到 `total - visible_count / 2` 个，
/// 末尾再填充 `visible_count / 2` 个作为不参与中奖计算的预留区域。
/// `total` 不超过数据源长度时只返回数据源的拷贝。
pub fn build_display_sequence<T: Clone>(
    source: &[T],
    total: usize,
    visible_count: usize,
) -> Result<Vec<T>, DrawError> {
    build_display_sequence_with(source, total, visible_count, &mut rand::rng())
}

/// 与 [`build_display_sequence`] 相同，但使用调用方提供的随机数生成器
pub fn build_display_sequence_with<T: Clone, R: Rng>(
    source: &[T],
    total: usize,
    visible_count: usize,
    rng: &mut R,
) -> Result<Vec<T>, DrawError> {
    if source.is_empty() {
        return Err(DrawError::invalid("source pool is empty"));
    }
    validate_visible_count(visible_count)?;

    let len = source.len();
    let tail = visible_count / 2;
    let mut sequence: VecDeque<T> = source.iter().cloned().collect();

    // 前置填充
    while sequence.len() < total.saturating_sub(tail) {
        sequence.push_front(source[rng.random_range(0..len)].clone());
    }
    // 后置填充
    while sequence.len() < total {
        sequence.push_back(source[rng.random_range(0..len)].clone());
    }

    Ok(sequence.into())
}

/// 可视个数必须是正奇数，保证中间位置唯一
pub(crate) fn validate_visible_count(visible_count: usize) -> Result<(), DrawError> {
    if visible_count == 0 || visible_count % 2 == 0 {
        return Err(DrawError::invalid(format!(
            "visible item count must be odd, got {}",
            visible_count
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length_and_membership() {
        let source = vec!["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(7);
        for total in [3, 4, 10, 57] {
            let seq = build_display_sequence_with(&source, total, 5, &mut rng).unwrap();
            assert_eq!(seq.len(), total);
            assert!(seq.iter().all(|item| source.contains(item)));
        }
    }

    #[test]
    fn test_source_sits_before_reserved_tail() {
        let source = vec![1, 2, 3, 4];
        let mut rng = StdRng::seed_from_u64(42);
        let seq = build_display_sequence_with(&source, 20, 5, &mut rng).unwrap();
        // 末尾预留 2 个，数据源紧挨在预留区之前
        assert_eq!(&seq[14..18], &source[..]);
    }

    #[test]
    fn test_every_source_item_present() {
        let source = vec!["gold", "silver", "bronze", "thanks"];
        let seq = build_display_sequence(&source, 40, 3).unwrap();
        for item in &source {
            assert!(seq.contains(item));
        }
    }

    #[test]
    fn test_total_not_larger_than_source_copies() {
        let source = vec!['x', 'y', 'z'];
        let seq = build_display_sequence(&source, 2, 3).unwrap();
        assert_eq!(seq, source);
        let seq = build_display_sequence(&source, 3, 3).unwrap();
        assert_eq!(seq, source);
    }

    #[test]
    fn test_short_total_only_pads_tail() {
        // total - tail 小于数据源长度时，只在末尾追加
        let source = vec![1, 2, 3];
        let seq = build_display_sequence(&source, 4, 5).unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(&seq[..3], &source[..]);
    }

    #[test]
    fn test_rejects_empty_source() {
        let source: Vec<u32> = Vec::new();
        assert!(matches!(
            build_display_sequence(&source, 10, 3),
            Err(DrawError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_even_visible_count() {
        let source = vec![1, 2];
        assert!(build_display_sequence(&source, 10, 4).is_err());
        assert!(build_display_sequence(&source, 10, 0).is_err());
    }
}
