//! 缓动曲线模块
//! 实现 CSS `cubic-bezier()` 定时函数，用于采样过渡进度

/// 缓动曲线
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// 匀速
    Linear,
    /// CSS 三次贝塞尔曲线，控制点为 (x1, y1) 与 (x2, y2)，端点固定为 (0,0) 和 (1,1)
    CubicBezier(f64, f64, f64, f64),
}

impl Default for Easing {
    fn default() -> Self {
        Self::LUCKY_DRAW
    }
}

impl Easing {
    /// 抽奖滚动使用的曲线：快速起步，长时间减速停下
    pub const LUCKY_DRAW: Easing = Easing::CubicBezier(0.35, 0.08, 0.26, 0.93);

    /// 根据时间进度 t (0.0-1.0) 计算动画进度
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let u = solve_curve_x(x1, x2, t);
                bezier(y1, y2, u)
            }
        }
    }

    /// 转换为 CSS 定时函数字符串
    pub fn to_css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// 一维三次贝塞尔：端点 0 和 1，控制点 p1 / p2
fn bezier(p1: f64, p2: f64, u: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

fn bezier_derivative(p1: f64, p2: f64, u: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

/// 求解参数 u，使 x(u) == x
/// 先用牛顿迭代，收敛失败时回退到二分法
fn solve_curve_x(x1: f64, x2: f64, x: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut u = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, u) - x;
        if err.abs() < EPSILON {
            return u;
        }
        let d = bezier_derivative(x1, x2, u);
        if d.abs() < 1e-6 {
            break;
        }
        u -= err / d;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    u = x;
    while lo < hi {
        let value = bezier(x1, x2, u);
        if (value - x).abs() < EPSILON {
            break;
        }
        if x > value {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
        if hi - lo < EPSILON {
            break;
        }
    }
    u
}
