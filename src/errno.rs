// 注册接口状态码，0 表示成功
// 分发路径不使用错误类型：原始调用的返回值与异常状态原样透传
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Errno {
    Ok = 0,         // 成功
    InvalidArg = 1, // 参数无效（空指针或空模块名）
    AlreadySet = 2, // 函数指针单元已写入，拒绝重复赋值
    Dup = 3,        // 模块名重复注册
}

impl Errno {
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<Errno> for i32 {
    fn from(value: Errno) -> Self {
        value as i32
    }
}
