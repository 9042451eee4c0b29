/// 测试地点枚举
///
/// 服务商提供的地理测试节点，进程内固定集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// 美国
    Us,
    /// 英国
    Uk,
    /// 印度
    In,
    /// 德国
    De,
    /// 澳大利亚
    Au,
}

impl Location {
    /// 全部可用地点（固定顺序）
    pub const ALL: [Location; 5] = [
        Location::Us,
        Location::Uk,
        Location::In,
        Location::De,
        Location::Au,
    ];

    /// 获取地点代码（服务商使用的短标识）
    pub fn code(self) -> &'static str {
        match self {
            Location::Us => "us",
            Location::Uk => "uk",
            Location::In => "in",
            Location::De => "de",
            Location::Au => "au",
        }
    }

    /// 获取展示名称
    pub fn name(self) -> &'static str {
        match self {
            Location::Us => "United States",
            Location::Uk => "United Kingdom",
            Location::In => "India",
            Location::De => "Germany",
            Location::Au => "Australia",
        }
    }

    /// 从地点代码解析
    pub fn from_code(code: &str) -> Option<Self> {
        Location::ALL.into_iter().find(|l| l.code() == code)
    }
}
