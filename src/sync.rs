//! 색상 스케일을 공유하는 여러 시리즈의 z 범위를 맞춘다.
//!
//! 렌더러가 스케일 범위를 직접 받을 수 있으면 [`shared_z_range`]를 넘기는 편이 낫다.
//! 그렇지 못한 경우 [`synchronize`]가 화면 밖 좌표(센티널)에 다른 시리즈의
//! 최소/최대 z 값을 붙여 모든 시리즈가 같은 (min, max)를 보고하게 만든다.
//! 센티널은 실제 데이터 기준으로 축 범위를 고정해야 보이지 않는다
//! ([`crate::series::visible_limits`]).

use log::debug;
use thiserror::Error;

use crate::series::{ScaleRange, Series};

/// 화면 밖 좌표 기본값.
pub const DEFAULT_SENTINEL: f64 = -1000.0;

/// 스케일 동기화 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// 그룹이 비어 있음
    #[error("지원하지 않는 그룹 크기: {0}")]
    InvalidGroupSize(usize),
    /// 범위를 정의할 수 없는 빈 시리즈
    #[error("{0}번째 시리즈가 비어 있어 범위를 계산할 수 없습니다")]
    EmptySeries(usize),
}

/// 동기화 결과. 입력 그룹은 건드리지 않고 새 시리즈를 만든다.
#[derive(Debug, Clone, PartialEq)]
pub struct Synchronized {
    /// 센티널이 덧붙은 시리즈들 (입력과 같은 순서)
    pub series: Vec<Series>,
    /// 각 시리즈의 원래 길이. 이 길이 뒤쪽은 모두 센티널이다.
    pub original_lens: Vec<usize>,
    /// 그룹 전체의 z 범위
    pub range: ScaleRange,
}

impl Synchronized {
    /// `index`번째 시리즈에서 센티널을 뺀 실제 데이터 부분.
    pub fn real_z(&self, index: usize) -> Option<&[f64]> {
        let series = self.series.get(index)?;
        let len = *self.original_lens.get(index)?;
        series.z().get(..len)
    }
}

// 1단계: 모든 시리즈의 지역 범위를 먼저 구한다.
fn local_ranges(group: &[Series]) -> Result<Vec<ScaleRange>, SyncError> {
    if group.is_empty() {
        return Err(SyncError::InvalidGroupSize(0));
    }
    group
        .iter()
        .enumerate()
        .map(|(i, s)| s.z_range().ok_or(SyncError::EmptySeries(i)))
        .collect()
}

/// 그룹 전체 z 범위. 렌더러에 직접 넘길 스케일 값으로 쓴다.
pub fn shared_z_range(group: &[Series]) -> Result<ScaleRange, SyncError> {
    let ranges = local_ranges(group)?;
    Ok(union_of(&ranges))
}

fn union_of(ranges: &[ScaleRange]) -> ScaleRange {
    ranges[1..].iter().fold(ranges[0], |acc, r| acc.union(*r))
}

/// 그룹의 모든 시리즈가 같은 z 범위를 갖도록 센티널 점을 덧붙인다.
///
/// 그룹 크기 k >= 2이면 각 시리즈 뒤에 2k개의 점 `(sentinel, sentinel, z)`가 붙는다.
/// z는 그룹 내 모든 시리즈(자기 자신 포함)의 최소값, 최대값 순서다.
/// k == 1이면 맞출 대상이 없으므로 복사본을 그대로 돌려준다.
pub fn synchronize(group: &[Series], sentinel: f64) -> Result<Synchronized, SyncError> {
    let ranges = local_ranges(group)?;
    let range = union_of(&ranges);
    let original_lens: Vec<usize> = group.iter().map(Series::len).collect();

    if group.len() == 1 {
        return Ok(Synchronized {
            series: group.to_vec(),
            original_lens,
            range,
        });
    }

    // 2단계: 구한 범위를 모든 시리즈에 전파한다.
    let series = group
        .iter()
        .map(|s| {
            let mut out = s.clone();
            for r in &ranges {
                out.push(sentinel, sentinel, r.min);
                out.push(sentinel, sentinel, r.max);
            }
            out
        })
        .collect();

    debug!(
        "z 스케일 동기화: 시리즈 {}개, 범위 [{}, {}]",
        group.len(),
        range.min,
        range.max
    );

    Ok(Synchronized {
        series,
        original_lens,
        range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(z: Vec<f64>) -> Series {
        let n = z.len();
        Series::new(vec![260.0; n], vec![2.0e6; n], z).unwrap()
    }

    #[test]
    fn empty_group_is_rejected() {
        assert_eq!(
            synchronize(&[], DEFAULT_SENTINEL).unwrap_err(),
            SyncError::InvalidGroupSize(0)
        );
    }

    #[test]
    fn empty_member_is_rejected() {
        let group = [series(vec![1.0]), series(vec![])];
        assert_eq!(shared_z_range(&group).unwrap_err(), SyncError::EmptySeries(1));
    }

    #[test]
    fn single_series_is_untouched() {
        let group = [series(vec![3.0, 1.0])];
        let out = synchronize(&group, DEFAULT_SENTINEL).unwrap();
        assert_eq!(out.series[0], group[0]);
        assert_eq!(out.range, ScaleRange { min: 1.0, max: 3.0 });
    }

    #[test]
    fn sentinels_follow_group_order() {
        let group = [series(vec![0.0, 10.0]), series(vec![5.0, 20.0])];
        let out = synchronize(&group, -1.0).unwrap();
        assert_eq!(out.series[1].z(), &[5.0, 20.0, 0.0, 10.0, 5.0, 20.0]);
        assert_eq!(&out.series[1].x()[2..], &[-1.0; 4]);
        assert_eq!(out.real_z(1), Some(&[5.0, 20.0][..]));
    }

    #[test]
    fn four_panels_are_supported() {
        let group: Vec<Series> = (0..4).map(|i| series(vec![i as f64, 10.0 * i as f64])).collect();
        let out = synchronize(&group, DEFAULT_SENTINEL).unwrap();
        for s in &out.series {
            assert_eq!(s.z_range(), Some(ScaleRange { min: 0.0, max: 30.0 }));
            assert_eq!(s.len(), 2 + 8);
        }
    }
}
