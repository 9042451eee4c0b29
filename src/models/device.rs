/// 测试设备类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// 桌面端
    Desktop,
    /// 移动端
    Mobile,
}

impl Device {
    /// 获取设备代码
    pub fn code(self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Mobile => "mobile",
        }
    }

    /// 从设备代码解析
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "desktop" => Some(Device::Desktop),
            "mobile" => Some(Device::Mobile),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Device::from_code("desktop"), Some(Device::Desktop));
        assert_eq!(Device::from_code("mobile"), Some(Device::Mobile));
        assert_eq!(Device::from_code("tablet"), None);
    }
}
