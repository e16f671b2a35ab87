// 分发层模块入口
// 控制流：OS 调用 trampoline -> 构建规范化参数 -> pre 扇出 -> 原始调用 -> post 扇出

// 规范化参数结构，跨模块 ABI 传递
pub mod args;
// 两阶段扇出逻辑，按操作家族划分
pub(crate) mod dispatch;
// uid 过滤策略
pub(crate) mod filter;
// 原生 JNI 接口访问，测试环境下替换为 mock
pub(crate) mod jnienv;
// SystemProperties.set 守卫
pub mod props;
// 模块注册表
pub(crate) mod registry;
// 原始函数指针单元
pub(crate) mod slots;
// 按历史 ABI 划分的签名适配层
pub mod trampoline;
