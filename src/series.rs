//! 패널 하나에 대응하는 (x, y, z) 데이터 묶음과 범위 계산 도구.
//!
//! x, y는 좌표(보통 온도 K, 압력 Pa), z는 색상 매핑에 쓰는 스칼라 채널이다.
//! 단위는 기록하지 않으므로 호출 측이 일관성을 유지해야 한다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 시리즈 구성/비교 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// 한 시리즈 안에서 x, y, z 길이가 다름
    #[error("x/y/z 길이가 다릅니다: x={x}, y={y}, z={z}")]
    ShapeMismatch { x: usize, y: usize, z: usize },
    /// 비교 대상 두 배열의 길이가 다름
    #[error("비교 대상 길이가 다릅니다: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
    /// 인덱스가 시리즈 길이를 벗어남
    #[error("인덱스 {index}가 길이 {len}를 벗어났습니다")]
    IndexOutOfRange { index: usize, len: usize },
}

/// 닫힌 구간 `[min, max]`. 색상 스케일이나 축 범위에 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

impl ScaleRange {
    /// 두 구간의 합집합.
    pub fn union(self, other: ScaleRange) -> ScaleRange {
        ScaleRange {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// 값 배열의 (최소, 최대). 비어 있으면 `None`. NaN은 건너뛴다.
    pub fn of(values: &[f64]) -> Option<ScaleRange> {
        let first = *values.first()?;
        let (min, max) = values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Some(ScaleRange { min, max })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// 패널의 x/y 축 범위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub x: ScaleRange,
    pub y: ScaleRange,
}

/// 한 패널용 (x, y, z) 데이터. 세 배열 길이는 항상 같다.
/// 역직렬화도 [`Series::new`]를 거치므로 길이가 다르면 실패한다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SeriesParts")]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

/// 검사 전 원시 필드.
#[derive(Deserialize)]
struct SeriesParts {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl TryFrom<SeriesParts> for Series {
    type Error = SeriesError;

    fn try_from(parts: SeriesParts) -> Result<Self, Self::Error> {
        Series::new(parts.x, parts.y, parts.z)
    }
}

impl Series {
    /// 길이를 검사한 뒤 시리즈를 만든다.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, SeriesError> {
        if x.len() != y.len() || y.len() != z.len() {
            return Err(SeriesError::ShapeMismatch {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }
        Ok(Self { x, y, z })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.x, self.y, self.z)
    }

    pub fn x_range(&self) -> Option<ScaleRange> {
        ScaleRange::of(&self.x)
    }

    pub fn y_range(&self) -> Option<ScaleRange> {
        ScaleRange::of(&self.y)
    }

    pub fn z_range(&self) -> Option<ScaleRange> {
        ScaleRange::of(&self.z)
    }

    /// 점 하나를 뒤에 붙인다. 세 배열에 동시에 추가하므로 길이 불변식이 유지된다.
    pub fn push(&mut self, x: f64, y: f64, z: f64) {
        self.x.push(x);
        self.y.push(y);
        self.z.push(z);
    }

    /// z가 `[lower, upper]` 안에 있는 점만 남긴 새 시리즈.
    pub fn filter_by_z(&self, lower: f64, upper: f64) -> Series {
        let window = ScaleRange {
            min: lower,
            max: upper,
        };
        let keep: Vec<usize> = self
            .z
            .iter()
            .enumerate()
            .filter(|(_, v)| window.contains(**v))
            .map(|(i, _)| i)
            .collect();
        self.pick(&keep)
    }

    /// 지정한 인덱스의 점만 골라 새 시리즈를 만든다.
    pub fn select(&self, indices: &[usize]) -> Result<Series, SeriesError> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.len()) {
            return Err(SeriesError::IndexOutOfRange {
                index: bad,
                len: self.len(),
            });
        }
        Ok(self.pick(indices))
    }

    /// `step`개마다 한 점씩 남긴다. 3D 산점도 밀도를 줄일 때 쓴다.
    pub fn stride(&self, step: usize) -> Series {
        let step = step.max(1);
        let keep: Vec<usize> = (0..self.len()).step_by(step).collect();
        self.pick(&keep)
    }

    fn pick(&self, indices: &[usize]) -> Series {
        Series {
            x: indices.iter().map(|&i| self.x[i]).collect(),
            y: indices.iter().map(|&i| self.y[i]).collect(),
            z: indices.iter().map(|&i| self.z[i]).collect(),
        }
    }
}

/// 값을 `[lower, upper]`로 잘라낸 새 배열을 돌려준다.
pub fn clamp_values(values: &[f64], lower: f64, upper: f64) -> Vec<f64> {
    values
        .iter()
        .map(|&v| {
            if v > upper {
                upper
            } else if v < lower {
                lower
            } else {
                v
            }
        })
        .collect()
}

/// 실제 데이터 기준 축 범위. x는 `[x_floor, max x]`, y는 `[0, max y]`.
/// 센티널 점이 화면에 보이지 않으려면 이 범위로 축을 고정해야 한다.
pub fn visible_limits(series: &Series, x_floor: f64) -> Option<AxisLimits> {
    let x = series.x_range()?;
    let y = series.y_range()?;
    Some(AxisLimits {
        x: ScaleRange {
            min: x_floor,
            max: x.max,
        },
        y: ScaleRange {
            min: 0.0,
            max: y.max,
        },
    })
}

/// 두 배열 길이가 같은지 확인한다.
pub fn ensure_same_len(left: &[f64], right: &[f64]) -> Result<(), SeriesError> {
    if left.len() != right.len() {
        return Err(SeriesError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}
